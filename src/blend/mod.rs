pub(crate) mod dispatch;
pub(crate) mod fill;
pub(crate) mod kernel;
pub(crate) mod pairs;
