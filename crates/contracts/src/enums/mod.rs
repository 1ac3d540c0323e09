pub mod notification_level;

pub use notification_level::NotificationLevel;
