use chrono::{NaiveTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{MemoryTable, StoreError};

use crate::data::{self, APPOINTMENT_DURATIONS, DEFAULT_APPOINTMENT_DURATION};
use crate::models::{
    hhmm, BlockField, BlockView, ClinicDay, DaySchedule, DayView, ScheduleError, ScheduleSettings,
    ScheduleView, TimeBlock, UpdateBlockRequest,
};

const SAVED_MESSAGE: &str = "¡Guardado!";

/// Weekly opening hours as edited from the admin panel: a per-day active
/// flag plus an ordered list of time blocks.
pub struct ScheduleService {
    days: MemoryTable<DaySchedule>,
    settings: RwLock<ScheduleSettings>,
    time_options: Vec<NaiveTime>,
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleService {
    pub fn new() -> Self {
        let days = data::default_schedule()
            .into_iter()
            .map(|(day, schedule)| (day.key(), schedule));

        Self {
            days: MemoryTable::seeded("weekly_schedule", days),
            settings: RwLock::new(ScheduleSettings {
                appointment_duration_minutes: DEFAULT_APPOINTMENT_DURATION,
                saved_at: None,
            }),
            time_options: data::time_options(),
        }
    }

    pub async fn get_schedule(&self) -> ScheduleView {
        self.build_view(None).await
    }

    pub async fn get_day(&self, day: ClinicDay) -> Result<DaySchedule, ScheduleError> {
        let schedule = self.days.get(day.key()).await.ok_or_else(|| StoreError::NotFound {
            table: self.days.name(),
            key: day.key().to_string(),
        })?;
        Ok(schedule)
    }

    /// Flip a day on or off. Its blocks survive the toggle.
    pub async fn toggle_day(&self, day: ClinicDay) -> Result<bool, ScheduleError> {
        let active = self
            .days
            .update(day.key(), |schedule| {
                schedule.active = !schedule.active;
                Ok::<_, ScheduleError>(schedule.active)
            })
            .await?;

        info!("{} is now {}", day, if active { "active" } else { "inactive" });
        Ok(active)
    }

    pub async fn add_block(&self, day: ClinicDay) -> Result<TimeBlock, ScheduleError> {
        let block = TimeBlock {
            id: Uuid::new_v4().to_string(),
            start: data::NEW_BLOCK_START,
            end: data::NEW_BLOCK_END,
        };

        self.days
            .update(day.key(), |schedule| {
                ensure_active(day, schedule)?;
                schedule.blocks.push(block.clone());
                Ok::<_, ScheduleError>(())
            })
            .await?;

        debug!("Added block {} to {}", block.id, day);
        Ok(block)
    }

    pub async fn update_block(
        &self,
        day: ClinicDay,
        block_id: &str,
        request: UpdateBlockRequest,
    ) -> Result<TimeBlock, ScheduleError> {
        let value = self.parse_option(&request.value)?;

        let updated = self
            .days
            .update(day.key(), |schedule| {
                ensure_active(day, schedule)?;
                let block = schedule
                    .blocks
                    .iter_mut()
                    .find(|b| b.id == block_id)
                    .ok_or_else(|| ScheduleError::BlockNotFound(block_id.to_string()))?;

                let (start, end) = match request.field {
                    BlockField::Start => (value, block.end),
                    BlockField::End => (block.start, value),
                };
                if start >= end {
                    return Err(ScheduleError::InvalidRange {
                        start: format_time(start),
                        end: format_time(end),
                    });
                }

                block.start = start;
                block.end = end;
                Ok(block.clone())
            })
            .await?;

        debug!("Updated block {} on {}", block_id, day);
        Ok(updated)
    }

    pub async fn delete_block(&self, day: ClinicDay, block_id: &str) -> Result<TimeBlock, ScheduleError> {
        let removed = self
            .days
            .update(day.key(), |schedule| {
                ensure_active(day, schedule)?;
                let index = schedule
                    .blocks
                    .iter()
                    .position(|b| b.id == block_id)
                    .ok_or_else(|| ScheduleError::BlockNotFound(block_id.to_string()))?;
                Ok::<_, ScheduleError>(schedule.blocks.remove(index))
            })
            .await?;

        debug!("Deleted block {} from {}", block_id, day);
        Ok(removed)
    }

    pub async fn set_appointment_duration(&self, minutes: u32) -> Result<u32, ScheduleError> {
        if !APPOINTMENT_DURATIONS.contains(&minutes) {
            return Err(ScheduleError::InvalidDuration(minutes));
        }
        self.settings.write().await.appointment_duration_minutes = minutes;
        info!("Appointment duration set to {} minutes", minutes);
        Ok(minutes)
    }

    /// Stamp the current schedule as saved. State only ever lives in memory.
    pub async fn save(&self) -> ScheduleView {
        let saved_at = Utc::now();
        self.settings.write().await.saved_at = Some(saved_at);
        info!("Weekly schedule saved at {}", saved_at);
        self.build_view(Some(SAVED_MESSAGE.to_string())).await
    }

    fn parse_option(&self, raw: &str) -> Result<NaiveTime, ScheduleError> {
        NaiveTime::parse_from_str(raw.trim(), hhmm::FORMAT)
            .ok()
            .filter(|time| self.time_options.contains(time))
            .ok_or_else(|| ScheduleError::InvalidTime(raw.to_string()))
    }

    async fn build_view(&self, message: Option<String>) -> ScheduleView {
        let settings = self.settings.read().await.clone();
        let mut days = Vec::with_capacity(ClinicDay::ALL.len());

        for day in ClinicDay::ALL {
            let schedule = self.days.get(day.key()).await.unwrap_or_default();
            days.push(DayView {
                day,
                label: day.label().to_string(),
                short_label: day.short_label(),
                active: schedule.active,
                status: schedule.status_line(),
                blocks: schedule
                    .blocks
                    .iter()
                    .map(|block| BlockView {
                        id: block.id.clone(),
                        start: format_time(block.start),
                        end: format_time(block.end),
                        end_options: self
                            .time_options
                            .iter()
                            .filter(|t| **t > block.start)
                            .map(|t| format_time(*t))
                            .collect(),
                    })
                    .collect(),
            });
        }

        ScheduleView {
            active_days: days.iter().filter(|d| d.active).count(),
            days,
            time_options: self.time_options.iter().map(|t| format_time(*t)).collect(),
            duration_options: APPOINTMENT_DURATIONS.to_vec(),
            appointment_duration_minutes: settings.appointment_duration_minutes,
            saved_at: settings.saved_at,
            message,
        }
    }
}

fn ensure_active(day: ClinicDay, schedule: &DaySchedule) -> Result<(), ScheduleError> {
    if schedule.active {
        Ok(())
    } else {
        Err(ScheduleError::DayInactive(day))
    }
}

fn format_time(time: NaiveTime) -> String {
    time.format(hhmm::FORMAT).to_string()
}
