pub mod test_find;
pub mod test_frontier_balance;
pub mod test_gmatch;
