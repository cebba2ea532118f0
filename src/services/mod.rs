pub mod ledger;
pub mod personalization;
