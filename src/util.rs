use rand::seq::SliceRandom;
use rand::*;
use std::cell::RefCell;

use crate::types::*;

thread_local!(
    static THREAD_RNG_KEY: RefCell<rngs::SmallRng> = {
        RefCell::new(rngs::SmallRng::from_entropy())
    }
);

pub fn random() -> Float {
    THREAD_RNG_KEY.with(|r| Float::from(r.borrow_mut().gen::<Float>()))
}

pub fn shuffle<T>(s: &mut [T]) {
    THREAD_RNG_KEY.with(|r| s.shuffle(&mut *r.borrow_mut()))
}

/// One jittered sample per stratum in each dimension, x strata in order,
/// y strata shuffled against them.
pub fn stratified_samples(samples: usize) -> Vec<Point2f> {
    let interval = 1.0 / samples as Float;
    let mut ys = Vec::with_capacity(samples);
    for i in 0..samples {
        ys.push((random() + i as Float) * interval);
    }
    shuffle(&mut ys);
    ys.iter().enumerate().map(|(i, y)| Point2f::new(i as Float * interval, *y)).collect()
}
