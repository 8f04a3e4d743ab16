pub mod dict_data_service;

pub use dict_data_service::DictDataService;
