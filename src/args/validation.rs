pub const MAX_IDLE_MINUTES: i64 = 7 * 24 * 60;

/// # Errors
///
/// Will return `Err` if the value is not a whole number of minutes between 1 and one week
pub fn check_idle_minutes(value: &str) -> Result<i64, String> {
    let minutes: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number of minutes."))?;
    if !(1..=MAX_IDLE_MINUTES).contains(&minutes) {
        return Err(format!(
            "Session idle time must be between 1 and {MAX_IDLE_MINUTES} minutes, got {minutes}."
        ));
    }
    Ok(minutes)
}

/// # Errors
///
/// Will return `Err` if the course name is blank
pub fn check_course_name(value: &str) -> Result<String, String> {
    let name = value.trim();
    if name.is_empty() {
        return Err("The default course name cannot be blank.".to_string());
    }
    Ok(name.to_string())
}

