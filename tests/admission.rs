//! Room capacity enforcement against a real store.

mod common;

use futures_util::future::join_all;
use sea_orm::ConnectionTrait;

use common::{setup, setup_file, student_data};
use dorm_service::domain::DomainError;
use dorm_service::infrastructure::database::translate;

#[tokio::test]
async fn third_student_into_double_room_is_refused() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let r101 = app.room(a1.id, "101", 2).await;

    for no in ["S1", "S2"] {
        app.dorm
            .students
            .create(student_data(no, a1.id, r101.id))
            .await
            .unwrap();
    }

    let err = app
        .dorm
        .students
        .create(student_data("S3", a1.id, r101.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RoomFull(_)), "got {:?}", err);
    assert_eq!(err.user_message(), "寝室人数已满");
    assert_eq!(app.occupants(r101.id).await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_admissions_never_exceed_capacity() {
    let app = setup_file(4).await;
    let a1 = app.building("A1").await;
    let room = app.room(a1.id, "201", 3).await;

    let attempts = (0..8).map(|i| {
        let dorm = app.dorm.clone();
        let data = student_data(&format!("R{:02}", i), a1.id, room.id);
        tokio::spawn(async move { dorm.students.create(data).await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("admission task"))
        .collect();

    let admitted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(admitted, 3);
    for err in results.into_iter().filter_map(Result::err) {
        assert!(matches!(err, DomainError::RoomFull(_)), "got {:?}", err);
    }
    assert_eq!(app.occupants(room.id).await, 3);
}

#[tokio::test]
async fn store_refuses_a_direct_insert_into_a_full_room() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let room = app.room(a1.id, "202", 1).await;
    app.dorm
        .students
        .create(student_data("S1", a1.id, room.id))
        .await
        .unwrap();

    let err = app
        .db
        .execute_unprepared(&format!(
            "INSERT INTO students (student_no, name, gender, building_id, room_id) \
             VALUES ('S2', '学生S2', '男', {}, {})",
            a1.id, room.id
        ))
        .await
        .unwrap_err();
    assert_eq!(translate(err, "创建学生失败"), DomainError::RoomFull(None));
    assert_eq!(app.occupants(room.id).await, 1);

    let err = app
        .db
        .execute_unprepared(&format!(
            "INSERT INTO students (student_no, name, gender, building_id, room_id) \
             VALUES ('S3', '学生S3', '男', {}, 9999)",
            a1.id
        ))
        .await
        .unwrap_err();
    assert_eq!(translate(err, "创建学生失败"), DomainError::RoomNotFound(None));
}

#[tokio::test]
async fn store_refuses_a_direct_move_into_a_full_room() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let full = app.room(a1.id, "203", 1).await;
    let open = app.room(a1.id, "204", 2).await;
    app.dorm
        .students
        .create(student_data("S1", a1.id, full.id))
        .await
        .unwrap();
    let mover = app
        .dorm
        .students
        .create(student_data("S2", a1.id, open.id))
        .await
        .unwrap();

    let err = app
        .db
        .execute_unprepared(&format!(
            "UPDATE students SET room_id = {} WHERE id = {}",
            full.id, mover.id
        ))
        .await
        .unwrap_err();
    assert_eq!(translate(err, "更新学生失败"), DomainError::RoomFull(None));

    // Rewriting other columns in place does not re-run the check.
    app.db
        .execute_unprepared(&format!(
            "UPDATE students SET phone = '13800000000', room_id = {} WHERE id = {}",
            open.id, mover.id
        ))
        .await
        .unwrap();
    assert_eq!(app.occupants(full.id).await, 1);
    assert_eq!(app.occupants(open.id).await, 1);
}

#[tokio::test]
async fn update_within_the_same_room_skips_the_capacity_check() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let single = app.room(a1.id, "301", 1).await;
    let student = app
        .dorm
        .students
        .create(student_data("S1", a1.id, single.id))
        .await
        .unwrap();

    let mut data = student_data("S1", a1.id, single.id);
    data.phone = "13800000000".to_string();
    let updated = app.dorm.students.update(student.id, data).await.unwrap();
    assert_eq!(updated.phone, "13800000000");
    assert_eq!(updated.room_id, Some(single.id));
}

#[tokio::test]
async fn moving_into_a_full_room_is_refused() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let full = app.room(a1.id, "401", 1).await;
    let open = app.room(a1.id, "402", 2).await;

    app.dorm
        .students
        .create(student_data("S1", a1.id, full.id))
        .await
        .unwrap();
    let mover = app
        .dorm
        .students
        .create(student_data("S2", a1.id, open.id))
        .await
        .unwrap();

    let err = app
        .dorm
        .students
        .update(mover.id, student_data("S2", a1.id, full.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RoomFull(_)));

    let unchanged = app.dorm.students.get(mover.id).await.unwrap();
    assert_eq!(unchanged.room_id, Some(open.id));
}

#[tokio::test]
async fn freed_bed_can_be_taken_again() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let room = app.room(a1.id, "501", 1).await;
    let first = app
        .dorm
        .students
        .create(student_data("S1", a1.id, room.id))
        .await
        .unwrap();

    app.dorm.students.delete(first.id).await.unwrap();
    assert_eq!(app.occupants(room.id).await, 0);
    app.dorm
        .students
        .create(student_data("S2", a1.id, room.id))
        .await
        .unwrap();
}
