use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDistance {
    pub day: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub weekly_mileage: f64,
    pub monthly_mileage: f64,
    pub total_runs: i32,
    pub average_pace: String,
    pub streak: i32,
    pub weekly_data: Vec<DailyDistance>,
}

/// Fixed figures; not yet derived from the runner's completed workouts.
pub fn progress_stats() -> ProgressStats {
    let week = [
        ("Mon", 5.2),
        ("Tue", 0.0),
        ("Wed", 8.1),
        ("Thu", 4.5),
        ("Fri", 0.0),
        ("Sat", 12.5),
        ("Sun", 6.2),
    ];

    ProgressStats {
        weekly_mileage: 32.5,
        monthly_mileage: 128.3,
        total_runs: 47,
        average_pace: "5:45/km".to_string(),
        streak: 12,
        weekly_data: week
            .iter()
            .map(|(day, distance)| DailyDistance {
                day: day.to_string(),
                distance: *distance,
            })
            .collect(),
    }
}
