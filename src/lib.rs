pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
    pub mod transaction;
}

pub mod utils {
    pub mod date;
    pub mod ddb;
    pub mod logs;
}

pub mod assets;
pub mod checkout;
pub mod history;
pub mod hold;
pub mod patrons;
