pub mod check_in_item_cmd;
pub mod check_out_item_cmd;
pub mod get_checkout_history_cmd;
pub mod get_current_holds_cmd;
pub mod mark_found_cmd;
pub mod mark_lost_cmd;
pub mod place_hold_cmd;
