//! Background jobs run on `tokio-cron-scheduler`.

pub mod observer_expiry;
