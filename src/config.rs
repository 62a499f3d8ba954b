use std::env;

use anyhow::{anyhow, Result};
use chrono::NaiveTime;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub birthdays_file: String,
    pub reminder_time: NaiveTime,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let birthdays_file = env::var("BIRTHDAYS_FILE")
            .unwrap_or_else(|_| "./data/birthdays.csv".to_string());
        let birthdays_file = if birthdays_file.trim().is_empty() {
            "./data/birthdays.csv".to_string()
        } else {
            birthdays_file
        };

        let time_str = env::var("REMINDER_TIME")
            .unwrap_or_else(|_| "09:00".to_string());
        let time_str = if time_str.trim().is_empty() {
            "09:00".to_string()
        } else {
            time_str
        };
        let reminder_time = NaiveTime::parse_from_str(time_str.trim(), "%H:%M")
            .map_err(|_| anyhow!("Invalid REMINDER_TIME, expected HH:MM"))?;

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            birthdays_file,
            reminder_time,
            http_port,
        })
    }
}
