use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Timelike, Utc};
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::context::BotContext;
use crate::store::BirthdayRecord;
use crate::utils::datetime::next_occurrence;
use crate::utils::markdown::escape_markdown;

/// Fires once a day at the configured trigger time and sends birthday
/// reminders to every subscriber.
pub struct ReminderService {
    bot: Bot,
    ctx: Arc<BotContext>,
    scheduler: JobScheduler,
    trigger_time: NaiveTime,
}

impl ReminderService {
    pub async fn new(
        bot: Bot,
        ctx: Arc<BotContext>,
        trigger_time: NaiveTime,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            ctx,
            scheduler,
            trigger_time,
        })
    }

    /// Schedules the daily check. The cron schedule recomputes the next
    /// absolute fire time after every run, so the trigger never drifts away
    /// from the configured wall-clock time.
    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let ctx = self.ctx.clone();
        let cron = format!(
            "0 {} {} * * *",
            self.trigger_time.minute(),
            self.trigger_time.hour()
        );

        let reminder_job = Job::new_async(cron.as_str(), move |_uuid, _l| {
            let bot = bot.clone();
            let ctx = ctx.clone();
            Box::pin(async move {
                if let Err(e) = check_and_send_reminders(bot, ctx).await {
                    tracing::error!("Failed to send reminders: {}", e);
                }
            })
        })?;

        self.scheduler.add(reminder_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Reminder service started - checking daily at {} UTC",
            self.trigger_time.format("%H:%M")
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn check_reminders_now(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        check_and_send_reminders(self.bot.clone(), self.ctx.clone()).await
    }
}

/// Records due on the reference day and the day after.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DueReminders {
    pub today: Vec<BirthdayRecord>,
    pub tomorrow: Vec<BirthdayRecord>,
}

impl DueReminders {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty()
    }
}

/// Buckets records by whether their next occurrence is today or tomorrow.
///
/// Occurrences go through the same calendar resolution as /list, so a 29-02
/// record fires on 1 March in non-leap years.
pub fn due_reminders(records: &[BirthdayRecord], today: NaiveDate) -> DueReminders {
    let tomorrow = today.succ_opt();
    let mut due = DueReminders::default();
    for record in records {
        match next_occurrence(record.day, record.month, today) {
            Some(date) if date == today => due.today.push(record.clone()),
            Some(date) if Some(date) == tomorrow => due.tomorrow.push(record.clone()),
            _ => {}
        }
    }
    due
}

async fn check_and_send_reminders(
    bot: Bot,
    ctx: Arc<BotContext>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subscribers = ctx.subscribers.snapshot().await;
    if subscribers.is_empty() {
        return Ok(());
    }
    let records = ctx.birthdays.snapshot().await;
    if records.is_empty() {
        return Ok(());
    }

    let today = Utc::now().date_naive();
    let due = due_reminders(&records, today);
    if due.is_empty() {
        tracing::debug!("No birthdays today or tomorrow");
        return Ok(());
    }

    for chat_id in subscribers {
        for record in &due.today {
            send_reminder(&bot, chat_id, &today_message(&record.name)).await;
        }
        for record in &due.tomorrow {
            send_reminder(&bot, chat_id, &tomorrow_message(&record.name)).await;
        }
    }

    Ok(())
}

fn today_message(name: &str) -> String {
    format!("🎉 It's *{}*'s birthday today\\!", escape_markdown(name))
}

fn tomorrow_message(name: &str) -> String {
    format!("🎁 *{}* has a birthday tomorrow\\!", escape_markdown(name))
}

async fn send_reminder(bot: &Bot, chat_id: i64, text: &str) {
    if let Err(e) = bot
        .send_message(ChatId(chat_id), text)
        .parse_mode(ParseMode::MarkdownV2)
        .await
    {
        tracing::error!("Failed to send reminder to chat {}: {}", chat_id, e);
    }
}
