#[macro_export]
macro_rules! iff {
    ($x: expr, $y: expr, $z: expr) => {
        if $x {
            $y
        } else {
            $z
        }
    };
}
