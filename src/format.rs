//! Display rows for a finished timetable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Course, Room, RoomId, SessionKind, Teacher, TeacherId, Timeslot, Timetable};

/// One scheduled session, ready for display or storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub room: String,
    pub day: String,
    pub time: String,
    pub teacher: String,
}

/// Name lookups used to turn IDs into display strings.
#[derive(Debug, Clone)]
pub struct NameLookup<'a> {
    teachers: HashMap<TeacherId, String>,
    rooms: HashMap<RoomId, &'a str>,
    slots: &'a [Timeslot],
}

impl<'a> NameLookup<'a> {
    pub fn new(teachers: &[Teacher], rooms: &'a [Room], slots: &'a [Timeslot]) -> Self {
        Self {
            teachers: teachers.iter().map(|t| (t.id, t.display_name())).collect(),
            rooms: rooms.iter().map(|r| (r.id, r.name.as_str())).collect(),
            slots,
        }
    }

    /// Teacher display name; empty for a course without a teacher.
    pub fn teacher(&self, id: Option<TeacherId>) -> String {
        id.and_then(|id| self.teachers.get(&id))
            .cloned()
            .unwrap_or_default()
    }

    /// Room name, or `#id` for a room missing from the lookup.
    pub fn room(&self, id: RoomId) -> String {
        match self.rooms.get(&id) {
            Some(name) => (*name).to_string(),
            None => format!("#{id}"),
        }
    }

    pub fn slot(&self, index: usize) -> Option<&'a Timeslot> {
        self.slots.get(index)
    }
}

/// Emits one row per session.
///
/// Courses appear in input order, each with its lectures before its labs.
/// A lecture's time is its slot string as stored; a lab's time joins the
/// stored start of its first slot to the stored end of its second. Courses
/// without an entry produce no rows.
pub fn format_rows(
    timetable: &Timetable,
    courses: &[Course],
    names: &NameLookup<'_>,
) -> Vec<TimetableRow> {
    let mut rows = Vec::new();

    for course in courses {
        let Some(entry) = timetable.get(course.id) else {
            continue;
        };
        let teacher = names.teacher(course.teacher_id);

        for lecture in entry.lectures() {
            let Some(slot) = names.slot(lecture.slot) else {
                continue;
            };
            rows.push(TimetableRow {
                subject: course.name.clone(),
                kind: SessionKind::Lecture,
                room: names.room(lecture.room),
                day: slot.day.clone(),
                time: slot.label().to_string(),
                teacher: teacher.clone(),
            });
        }

        for lab in entry.labs() {
            let (Some(first), Some(second)) = (names.slot(lab.first), names.slot(lab.second))
            else {
                continue;
            };
            rows.push(TimetableRow {
                subject: course.name.clone(),
                kind: SessionKind::Lab,
                room: names.room(lab.room),
                day: first.day.clone(),
                time: format!("{} - {}", first.start_label(), second.end_label()),
                teacher: teacher.clone(),
            });
        }
    }

    rows
}

/// Renders rows as a fixed-width text table.
pub fn render_table(rows: &[TimetableRow]) -> String {
    const HEADERS: [&str; 6] = ["Subject", "Type", "Room", "Day", "Time", "Teacher"];

    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.subject.clone(),
                r.kind.to_string(),
                r.room.clone(),
                r.day.clone(),
                r.time.clone(),
                r.teacher.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let rule = format!("+{rule}+\n");

    let line = |values: &[&str]| -> String {
        let body: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!(" {v:<w$} "))
            .collect();
        format!("|{}|\n", body.join("|"))
    };

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&line(&HEADERS));
    out.push_str(&rule);
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&values));
    }
    out.push_str(&rule);
    out
}
