use slotbook_core::WeekView;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Renders one week as a text grid: hours down the side, dates across the
/// top. Non-selectable days are marked locked instead of being hidden so
/// the horizon boundary is visible.
pub fn render(owner: &str, view: &WeekView) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Time".to_string()];
    for day in &view.days {
        let mut label = format!("{} {}", day.weekday, day.date.format("%m-%d"));
        if day.is_today {
            label.push_str(" *");
        }
        if !day.selectable {
            label.push_str(" [locked]");
        }
        header.push(label);
    }
    builder.push_record(header);

    let slot_count = view.days.first().map(|d| d.time_slots.len()).unwrap_or(0);
    for i in 0..slot_count {
        let mut row = Vec::with_capacity(view.days.len() + 1);
        row.push(view.days[0].time_slots[i].time.clone());
        for day in &view.days {
            row.push(if day.time_slots[i].is_available {
                "✔".to_string()
            } else {
                "·".to_string()
            });
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    let mut notes = Vec::new();
    if !view.can_go_previous {
        notes.push("at the current week");
    }
    if !view.can_go_next {
        notes.push("at the end of the editable window");
    }
    let notes = if notes.is_empty() {
        String::new()
    } else {
        format!(" ({})", notes.join(", "))
    };

    format!("{} - week of {}{}\n{}", owner, view.label, notes, table)
}
