pub(crate) mod axis;
pub(crate) mod sample;
