//! End-to-end guard distribution scenarios.

use u_proctor::models::{
    ExamPlan, GuardRules, GuardSlot, MaxGuardPeriods, Room, Teacher, UNFILLED_SLOT_TEXT,
};
use u_proctor::scheduler::{assign, GuardScheduler, GuardStats};
use u_proctor::{logging, GuardError, GuardSnapshot};

#[test]
fn coordinator_is_excluded_from_own_subject() {
    logging::init_test();
    let teachers = vec![Teacher::new("A", "math"), Teacher::new("B", "physics")];
    let rooms = vec![Room::new(1, "R1").on_day("Mon").in_period("P1")];
    let plan = ExamPlan::new()
        .with_day("Mon")
        .with_subject("P1", "math")
        .with_coordinator("math", "A");
    let rules = GuardRules::new()
        .with_required_per_room(1)
        .with_exclude_subject_teacher(true);

    let schedule = assign(&teachers, &rooms, &plan, &rules).unwrap();
    assert_eq!(schedule.rooms[0].guards, vec![GuardSlot::teacher("B")]);
}

#[test]
fn rest_day_blocks_same_day_reuse() {
    logging::init_test();
    let teachers = vec![Teacher::new("A", "math")];
    let rooms = vec![
        Room::new(1, "R1").on_day("Mon"),
        Room::new(2, "R2").on_day("Mon"),
    ];
    let plan = ExamPlan::new().with_day("Mon");
    let rules = GuardRules::new().with_rest_days(1);

    let schedule = assign(&teachers, &rooms, &plan, &rules).unwrap();
    assert_eq!(schedule.rooms[0].guards, vec![GuardSlot::teacher("A")]);
    assert_eq!(schedule.rooms[1].guards, vec![GuardSlot::Unfilled]);
    assert_eq!(schedule.rooms[1].guards[0].to_string(), UNFILLED_SLOT_TEXT);
}

#[test]
fn empty_roster_reports_guidance() {
    let rooms = vec![Room::new(1, "R1")];
    let err = assign(&[], &rooms, &ExamPlan::new(), &GuardRules::new()).unwrap_err();
    assert!(err.is_guidance());
    assert!(err.to_string().contains("add teachers and rooms"));

    let teachers = vec![Teacher::new("A", "math")];
    let err = assign(&teachers, &[], &ExamPlan::new(), &GuardRules::new()).unwrap_err();
    assert!(matches!(err, GuardError::NoRooms));
}

#[test]
fn week_of_exams_spreads_load() {
    logging::init_test();
    let teachers: Vec<Teacher> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .zip(["math", "physics", "history", "arabic", "french", "biology"])
        .map(|(n, s)| Teacher::new(*n, s))
        .collect();
    let days = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    let plan = ExamPlan::new()
        .with_days(days)
        .with_subject("Morning", "math")
        .with_subject("Evening", "history")
        .with_coordinator("math", "A")
        .with_coordinator("history", "C");

    let mut rooms = Vec::new();
    for (d, day) in days.iter().enumerate() {
        for (p, period) in ["Morning", "Evening"].iter().enumerate() {
            let id = (d * 2 + p) as u32 + 1;
            rooms.push(Room::new(id, format!("Hall {id}")).on_day(*day).in_period(*period));
        }
    }
    let rules = GuardRules::new()
        .with_required_per_room(2)
        .with_max_guard_periods(MaxGuardPeriods::OneDay);

    let schedule = GuardScheduler::new(rules).schedule(&teachers, &rooms, &plan).unwrap();
    let stats = GuardStats::calculate(&schedule, &teachers);

    assert_eq!(schedule.room_count(), 10);
    assert!(stats.is_fully_staffed());
    assert_eq!(stats.total_guards(), 20);
    assert!(stats.max_load().unwrap() <= 5);
    for room in &schedule.rooms {
        if room.period.as_deref() == Some("Morning") {
            assert!(!room.has_guard("A"));
        } else {
            assert!(!room.has_guard("C"));
        }
    }
}

#[test]
fn manual_override_after_automatic_run() {
    let teachers = vec![Teacher::new("A", "math"), Teacher::new("B", "physics")];
    let rooms = vec![Room::new(1, "R1"), Room::new(2, "R2")];
    let plan = ExamPlan::new();
    let mut schedule = assign(&teachers, &rooms, &plan, &GuardRules::new()).unwrap();
    let untouched = schedule.rooms[0].clone();

    schedule.set_manual(2, ["A", "Visitor"]).unwrap();
    assert_eq!(schedule.rooms[0], untouched);
    assert_eq!(
        schedule.rooms[1].guard_names().collect::<Vec<_>>(),
        ["A", "Visitor"]
    );

    let stats = GuardStats::calculate(&schedule, &teachers);
    assert_eq!(stats.count("A"), 2);
    assert_eq!(stats.count("B"), 0);
    assert_eq!(stats.count("Visitor"), 1);

    let err = schedule.set_manual(9, ["A"]).unwrap_err();
    assert!(matches!(err, GuardError::UnknownRoom { room_id: 9 }));
}

#[test]
fn stats_follow_manual_duplicates() {
    let teachers = vec![Teacher::new("A", "math"), Teacher::new("B", "physics")];
    let rooms = vec![Room::new(1, "R1"), Room::new(2, "R2")];
    let rules = GuardRules::new().with_required_per_room(2);
    let mut schedule = assign(&teachers, &rooms, &ExamPlan::new(), &rules).unwrap();

    schedule.set_manual(1, ["B", "B", UNFILLED_SLOT_TEXT]).unwrap();

    let stats = GuardStats::calculate(&schedule, &teachers);
    let filled: usize = schedule.rooms.iter().map(|r| r.guard_names().count()).sum();
    assert_eq!(filled, 4);
    assert_eq!(stats.total_guards(), filled);
    assert_eq!(stats.count("B"), 3);
    assert_eq!(stats.unfilled_slots, 1);
    assert_eq!(stats.understaffed_rooms, vec![1]);
}

#[test]
fn stored_document_round_trip_through_engine() {
    logging::init_test();
    let json = r#"{
        "schoolData": { "name": "Lycee Ibn Sina", "examPeriod": "June" },
        "examsData": {
            "examDays": ["Day 1", "Day 2", "Day 3"],
            "periods": ["Morning"],
            "subjects": { "Morning": ["Math", "Physics"] },
            "rooms": [
                { "id": 1, "name": "1" },
                { "id": 2, "name": "2" },
                { "id": 3, "name": "3" }
            ],
            "teachers": [
                { "name": "Amina", "subject": "Math" },
                { "name": "Omar", "subject": "physics" },
                { "name": "Yusuf", "subject": "history" }
            ]
        },
        "roomAssignments": [
            { "roomId": 1, "roomName": "1", "day": "Day 1", "period": "Morning", "assignedTeachers": [] },
            { "roomId": 2, "roomName": "2", "day": "Day 2", "period": "Morning", "assignedTeachers": [] },
            { "roomId": 3, "roomName": "3", "day": "Day 3", "period": "Morning", "assignedTeachers": [] }
        ],
        "coordinators": { "Math": "Amina" },
        "autoRules": { "requiredPerRoom": 2, "excludeSubjectTeacher": true, "restDays": 1, "maxGuardPeriods": "all" }
    }"#;

    let snapshot = GuardSnapshot::from_json(json).unwrap().validated().unwrap();
    assert_eq!(snapshot.teachers[0].subject, "math");
    assert_eq!(snapshot.plan.subjects_in("Morning"), ["math", "physics"]);

    let d = snapshot.distribute().unwrap();
    // Amina coordinates math (every room is a morning math exam).
    assert!(d.schedule.rooms.iter().all(|r| !r.has_guard("Amina")));
    // Two slots per room, one day of rest: Omar and Yusuf take day 1 and day 3.
    assert_eq!(
        d.schedule.rooms[0].guards,
        vec![GuardSlot::teacher("Omar"), GuardSlot::teacher("Yusuf")]
    );
    assert_eq!(
        d.schedule.rooms[1].guards,
        vec![GuardSlot::Unfilled, GuardSlot::Unfilled]
    );
    assert_eq!(
        d.schedule.rooms[2].guards,
        vec![GuardSlot::teacher("Omar"), GuardSlot::teacher("Yusuf")]
    );
    assert_eq!(d.stats.unfilled_slots, 2);
    assert_eq!(d.stats.understaffed_rooms, vec![2]);

    let out = serde_json::to_value(&d.schedule).unwrap();
    assert_eq!(out[1]["assignedTeachers"][0], UNFILLED_SLOT_TEXT);
}
