use time::Date;

/// `D-N` before the festival, `D-Day` on the day, `D+N` after.
pub fn countdown_label(festival: Date, today: Date) -> String {
    let days = (festival - today).whole_days();
    match days {
        d if d > 0 => format!("D-{}", d),
        0 => "D-Day".to_string(),
        d => format!("D+{}", d.abs()),
    }
}
