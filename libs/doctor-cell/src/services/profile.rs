use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_database::MemoryTable;
use shared_utils::{tel_link, whatsapp_link};

use crate::data;
use crate::models::{
    DoctorProfile, LandingLinks, LandingPage, OfficeCard, ProfileError, ReviewCard, SpecialtyCard,
};

pub const BOOKING_PATH: &str = "/booking";
pub const ADMIN_PATH: &str = "/admin";

pub struct ProfileService {
    profiles: MemoryTable<DoctorProfile>,
    default_slug: String,
}

impl ProfileService {
    pub fn new(config: &AppConfig) -> Self {
        let profiles = data::doctor_profiles()
            .into_iter()
            .map(|profile| (profile.slug.clone(), profile));

        Self {
            profiles: MemoryTable::seeded("doctor_profiles", profiles),
            default_slug: config.default_doctor_slug.clone(),
        }
    }

    /// Resolve a profile by slug. Unknown slugs fall back to the clinic's
    /// default doctor instead of failing.
    pub async fn get_profile(&self, slug: Option<&str>) -> Result<DoctorProfile, ProfileError> {
        if let Some(slug) = slug {
            if let Some(profile) = self.profiles.get(slug).await {
                return Ok(profile);
            }
            debug!("Unknown doctor slug {}, falling back to {}", slug, self.default_slug);
        }

        self.profiles.get(&self.default_slug).await.ok_or_else(|| {
            warn!("Default doctor profile {} is not seeded", self.default_slug);
            ProfileError::NotFound(self.default_slug.clone())
        })
    }

    pub async fn get_landing(&self, slug: Option<&str>) -> Result<LandingPage, ProfileError> {
        let profile = self.get_profile(slug).await?;
        Ok(build_landing(profile))
    }
}

fn build_landing(profile: DoctorProfile) -> LandingPage {
    let specialties = profile
        .specialties
        .iter()
        .map(|s| SpecialtyCard {
            icon: s.icon.clone(),
            name: s.name.clone(),
            detail: s.detail(),
        })
        .collect();

    let reviews = profile
        .reviews
        .iter()
        .map(|r| ReviewCard {
            name: r.name.clone(),
            initial: r.name.chars().next().map(String::from).unwrap_or_default(),
            stars: r.rating.min(5),
            text: r.text.clone(),
        })
        .collect();

    let office = OfficeCard {
        tel_link: tel_link(&profile.office.phone),
        whatsapp_link: whatsapp_link(&profile.office.phone),
        name: profile.office.name,
        address: profile.office.address,
        hours: profile.office.hours,
        phone: profile.office.phone,
    };

    LandingPage {
        stats: profile.show_stats.then_some(profile.stats),
        slug: profile.slug,
        clinic_name: profile.clinic_name,
        name: profile.name,
        specialty: profile.specialty,
        subtitle: profile.subtitle,
        avatar_url: profile.avatar_url,
        rating: profile.rating,
        office,
        specialties,
        reviews,
        links: LandingLinks {
            booking: BOOKING_PATH.to_string(),
            admin: ADMIN_PATH.to_string(),
        },
    }
}
