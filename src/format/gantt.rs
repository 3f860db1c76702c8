// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::lines::Lines;
use crate::model::GanttChart;

fn push_range(lines: &mut Lines, depth: usize, from: &str, to: &str) {
    lines.push_with(depth, |out| {
        out.push_str(from);
        out.push(' ');
        out.push_str(to);
    });
}

/// Export a Gantt chart: the overall range, then each section with its schedules.
///
/// A schedule is two lines: its title, and its `from to` range one level deeper.
pub fn render_gantt_chart(chart: &GanttChart) -> String {
    let mut lines = Lines::new();
    push_range(&mut lines, 0, &chart.from, &chart.to);
    for item in &chart.chart_items {
        lines.push(1, &item.title);
        for schedule in &item.schedules {
            lines.push(2, &schedule.title);
            push_range(&mut lines, 3, &schedule.from, &schedule.to);
        }
    }
    lines.finish()
}

#[cfg(test)]
mod tests {
    use super::render_gantt_chart;
    use crate::model::{ChartItem, GanttChart, Schedule};

    #[test]
    fn schedules_nest_under_their_section() {
        let chart = GanttChart {
            from: "2024-01-01".to_owned(),
            to: "2024-03-31".to_owned(),
            chart_items: vec![
                ChartItem::new(
                    "Design",
                    vec![Schedule::new("Wireframes", "2024-01-01", "2024-01-14")],
                ),
                ChartItem::new("Build", Vec::new()),
            ],
        };

        assert_eq!(
            render_gantt_chart(&chart),
            "2024-01-01 2024-03-31\n    Design\n        Wireframes\n            2024-01-01 2024-01-14\n    Build"
        );
    }

    #[test]
    fn chart_without_items_is_just_the_range() {
        let chart =
            GanttChart { from: "a".to_owned(), to: "b".to_owned(), chart_items: Vec::new() };
        assert_eq!(render_gantt_chart(&chart), "a b");
    }
}
