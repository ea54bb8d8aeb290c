pub mod ballots;
pub mod category;
pub mod dispatch;
pub mod lifecycle;
pub mod option;
pub mod results;
pub mod shared;
pub mod vote;

#[cfg(test)]
pub mod test_support;
