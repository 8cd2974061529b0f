pub mod add_branch_cmd;
pub mod add_patron_cmd;
pub mod get_patron_cmd;
pub mod get_patron_loans_cmd;
