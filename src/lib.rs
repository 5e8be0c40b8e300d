pub mod calculator;
pub mod memo;
pub mod test_utils;
