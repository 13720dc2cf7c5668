//! Seed data for the doctor landing page and the weekly schedule.

use chrono::{Duration, NaiveTime};

use crate::models::{
    ClinicDay, DaySchedule, DoctorProfile, OfficeInfo, ProfileStat, RatingSummary, Review,
    Specialty, TimeBlock,
};

pub const APPOINTMENT_DURATIONS: [u32; 5] = [15, 20, 30, 45, 60];
pub const DEFAULT_APPOINTMENT_DURATION: u32 = 30;

/// Only for const items, so a bad literal fails the build.
const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid clock time"),
    }
}

const FIRST_OPTION: NaiveTime = hm(6, 0);
const LAST_OPTION: NaiveTime = hm(19, 0);
const OPTION_STEP_MINUTES: i64 = 30;

/// Bounds used for a freshly added block.
pub const NEW_BLOCK_START: NaiveTime = hm(8, 0);
pub const NEW_BLOCK_END: NaiveTime = hm(12, 0);

const NOON: NaiveTime = hm(12, 0);
const ONE_PM: NaiveTime = hm(13, 0);
const TWO_PM: NaiveTime = hm(14, 0);
const FIVE_PM: NaiveTime = hm(17, 0);

/// 06:00 through 19:00 in half-hour steps.
pub fn time_options() -> Vec<NaiveTime> {
    let mut options = Vec::new();
    let mut current = FIRST_OPTION;
    while current <= LAST_OPTION {
        options.push(current);
        current += Duration::minutes(OPTION_STEP_MINUTES);
    }
    options
}

fn block(id: &str, start: NaiveTime, end: NaiveTime) -> TimeBlock {
    TimeBlock { id: id.to_string(), start, end }
}

pub fn default_schedule() -> Vec<(ClinicDay, DaySchedule)> {
    vec![
        (
            ClinicDay::Monday,
            DaySchedule {
                active: true,
                blocks: vec![block("1", NEW_BLOCK_START, NOON), block("2", TWO_PM, FIVE_PM)],
            },
        ),
        (
            ClinicDay::Tuesday,
            DaySchedule { active: true, blocks: vec![block("3", NEW_BLOCK_START, NOON)] },
        ),
        (
            ClinicDay::Wednesday,
            DaySchedule { active: true, blocks: vec![block("4", NEW_BLOCK_START, FIVE_PM)] },
        ),
        (ClinicDay::Thursday, DaySchedule { active: false, blocks: vec![] }),
        (
            ClinicDay::Friday,
            DaySchedule { active: true, blocks: vec![block("5", NEW_BLOCK_START, ONE_PM)] },
        ),
    ]
}

pub fn doctor_profiles() -> Vec<DoctorProfile> {
    vec![DoctorProfile {
        slug: "dra-rosana-arteaga".to_string(),
        name: "Dra. Rosana Arteaga".to_string(),
        specialty: "Medicina General".to_string(),
        subtitle: "Especialista en Medicina General & Medicina Interna".to_string(),
        clinic_name: "MediCare Clinic".to_string(),
        avatar_url: "/assets/doctor-avatar.jpg".to_string(),
        show_stats: false,
        stats: vec![
            stat("10+", "Años exp."),
            stat("2,400+", "Pacientes"),
            stat("98%", "Satisfacción"),
        ],
        specialties: vec![
            specialty("🩺", "Medicina General", 30, "$20"),
            specialty("❤️", "Cardiología Preventiva", 45, "$35"),
            specialty("🧬", "Medicina Interna", 40, "$30"),
        ],
        reviews: vec![
            review("María L.", 5, "Excelente atención, muy profesional."),
            review("Carlos M.", 5, "La mejor doctora, super recomendada."),
        ],
        rating: RatingSummary { average: 4.9, count: 128 },
        office: OfficeInfo {
            name: "Consultorio Principal".to_string(),
            address: "Av. Libertador 1250, Caracas".to_string(),
            hours: "Lun–Vie 8am–5pm".to_string(),
            phone: "+58 412-5559999".to_string(),
        },
    }]
}

fn stat(value: &str, label: &str) -> ProfileStat {
    ProfileStat { value: value.to_string(), label: label.to_string() }
}

fn specialty(icon: &str, name: &str, duration_minutes: u32, price: &str) -> Specialty {
    Specialty {
        icon: icon.to_string(),
        name: name.to_string(),
        duration_minutes,
        price: Some(price.to_string()),
    }
}

fn review(name: &str, rating: u8, text: &str) -> Review {
    Review { name: name.to_string(), rating, text: text.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_options_cover_working_day() {
        let options = time_options();
        assert_eq!(options.len(), 27);
        assert_eq!(options.first(), Some(&FIRST_OPTION));
        assert_eq!(options.last(), Some(&LAST_OPTION));
    }

    #[test]
    fn test_default_schedule_shape() {
        let schedule = default_schedule();
        let days: Vec<ClinicDay> = schedule.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, ClinicDay::ALL.to_vec());
        assert_eq!(schedule.iter().filter(|(_, s)| s.active).count(), 4);
    }
}
