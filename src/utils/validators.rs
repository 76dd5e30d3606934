use anyhow::{anyhow, Result};

use crate::models::stress_entry;
use crate::models::user_profile;

/// Validate a 1-5 rating such as stress level or sleep quality
pub fn validate_rating(field: &str, value: i32) -> Result<()> {
    if !(1..=5).contains(&value) {
        return Err(anyhow!("{} must be between 1 and 5, got {}", field, value));
    }
    Ok(())
}

/// Validate an email address (one '@', non-empty local part and dotted domain)
pub fn validate_email(email: &str) -> Result<()> {
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| anyhow!("Invalid email address: {}", email))?;

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(anyhow!("Invalid email address: {}", email));
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(anyhow!("Invalid email address: {}", email));
    }

    Ok(())
}

/// Validate a display name (1-100 characters after trimming)
pub fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(anyhow!("Name must be between 1 and 100 characters"));
    }
    Ok(())
}

pub fn validate_stress_entry(entry: &stress_entry::Model) -> Result<()> {
    validate_rating("level", entry.level)?;
    if let Some(sleep_quality) = entry.sleep_quality {
        validate_rating("sleepQuality", sleep_quality)?;
    }
    Ok(())
}

/// Validate the numeric ranges of a profile; weekdays run 0 (Sunday) to 6
pub fn validate_profile(profile: &user_profile::Model) -> Result<()> {
    if profile.age < 0 {
        return Err(anyhow!("age must not be negative"));
    }
    if profile.height < 0.0 || profile.weight < 0.0 || profile.weekly_mileage < 0.0 {
        return Err(anyhow!("height, weight and weeklyMileage must not be negative"));
    }
    if let Some(day) = profile
        .available_training_days
        .0
        .iter()
        .find(|day| !(0..=6).contains(*day))
    {
        return Err(anyhow!(
            "availableTrainingDays must contain weekdays 0-6, got {}",
            day
        ));
    }
    Ok(())
}
