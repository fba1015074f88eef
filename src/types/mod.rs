pub mod api;
pub mod daily_precipitation;
pub mod highlight;
pub mod layout;
pub mod month_key;
pub mod station;
pub mod window;
