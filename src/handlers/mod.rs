mod menu_received;

pub use menu_received::menu_received;
