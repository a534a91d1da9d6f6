use taste_core::models::TrajectoryDirection;

/// Human-readable sentence for a direction.
pub fn describe(direction: TrajectoryDirection, shift_count: usize) -> String {
    match direction {
        TrajectoryDirection::Stable => {
            "Your taste profile is stable. Your preferences have stayed consistent over time."
                .to_string()
        }
        TrajectoryDirection::Refining => {
            "Your taste is refining. You are becoming more certain about what you already love."
                .to_string()
        }
        TrajectoryDirection::Expanding => {
            "Your taste is expanding. You are exploring new dimensions of travel.".to_string()
        }
        TrajectoryDirection::Shifting => format!(
            "Your taste is shifting. {shift_count} areas of your preferences have changed direction."
        ),
    }
}
