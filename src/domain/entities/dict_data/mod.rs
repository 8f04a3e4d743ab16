pub mod dict_data;

pub use dict_data::{DictData, DictStatus};
