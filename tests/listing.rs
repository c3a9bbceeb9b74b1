//! Filtering, pagination and the aggregation views.

mod common;

use common::{building_data, payment_data, setup, student_data};
use dorm_service::domain::{BuildingFilter, RoomFilter, StudentFilter};
use dorm_service::shared::{Listing, PageRequest};

#[tokio::test]
async fn pages_report_the_filtered_total() {
    let app = setup().await;
    for i in 1..=25 {
        app.dorm
            .buildings
            .create(building_data(&format!("B{:02}", i)))
            .await
            .unwrap();
    }

    let page2 = app
        .dorm
        .buildings
        .list(BuildingFilter::default(), PageRequest::new(Some(2), Some(10)))
        .await
        .unwrap();
    match &page2 {
        Listing::Page(p) => {
            assert_eq!(p.items.len(), 10);
            assert_eq!(p.total, 25);
            assert_eq!(p.items[0].building_no, "B11");
        }
        Listing::All(_) => panic!("expected a page"),
    }

    let page3 = app
        .dorm
        .buildings
        .list(BuildingFilter::default(), PageRequest::new(Some(3), Some(10)))
        .await
        .unwrap();
    assert_eq!(page3.items().len(), 5);
    assert_eq!(page3.total(), 25);

    let beyond = app
        .dorm
        .buildings
        .list(BuildingFilter::default(), PageRequest::new(Some(9), Some(10)))
        .await
        .unwrap();
    assert!(beyond.items().is_empty());
    assert_eq!(beyond.total(), 25);

    let far = app
        .dorm
        .students
        .list(StudentFilter::default(), PageRequest::new(Some(i64::MAX), Some(100)))
        .await
        .unwrap();
    assert!(far.items().is_empty());
    assert_eq!(far.total(), 0);

    let all = app
        .dorm
        .buildings
        .list(BuildingFilter::default(), PageRequest::all())
        .await
        .unwrap();
    assert!(matches!(all, Listing::All(ref items) if items.len() == 25));
}

#[tokio::test]
async fn keyword_matches_exactly() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    app.building("A10").await;
    app.room(a1.id, "101", 2).await;
    app.room(a1.id, "1011", 2).await;

    let found = app
        .dorm
        .buildings
        .list(
            BuildingFilter {
                keyword: Some("A1".into()),
            },
            PageRequest::all(),
        )
        .await
        .unwrap();
    assert_eq!(found.items().len(), 1);
    assert_eq!(found.items()[0].id, a1.id);

    let rooms = app
        .dorm
        .rooms
        .list(
            RoomFilter {
                keyword: Some("101".into()),
                building_id: Some(a1.id),
            },
            PageRequest::all(),
        )
        .await
        .unwrap();
    assert_eq!(rooms.items().len(), 1);
}

#[tokio::test]
async fn students_filter_by_room_number() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let r101 = app.room(a1.id, "101", 4).await;
    let r102 = app.room(a1.id, "102", 4).await;
    for (no, room) in [("S1", &r101), ("S2", &r101), ("S3", &r102)] {
        app.dorm
            .students
            .create(student_data(no, a1.id, room.id))
            .await
            .unwrap();
    }

    let in_101 = app
        .dorm
        .students
        .list(
            StudentFilter {
                room_no: Some("101".into()),
                ..Default::default()
            },
            PageRequest::all(),
        )
        .await
        .unwrap();
    let numbers: Vec<_> = in_101.items().iter().map(|s| s.student_no.as_str()).collect();
    assert_eq!(numbers, ["S1", "S2"]);
}

#[tokio::test]
async fn occupancy_and_payment_totals_per_building() {
    let app = setup().await;
    let a1 = app.building("A1").await;
    let b1 = app.building("B1").await;
    let r101 = app.room(a1.id, "101", 2).await;
    let r102 = app.room(a1.id, "102", 4).await;
    for (no, room) in [("S1", &r101), ("S2", &r101), ("S3", &r102)] {
        app.dorm
            .students
            .create(student_data(no, a1.id, room.id))
            .await
            .unwrap();
    }
    app.dorm
        .payments
        .create(payment_data("P1", a1.id, r101.id, None, 100.0))
        .await
        .unwrap();
    app.dorm
        .payments
        .create(payment_data("P2", a1.id, r102.id, None, 50.5))
        .await
        .unwrap();

    let occupancy = app.dorm.stats.building_occupancy().await.unwrap();
    assert_eq!(occupancy.len(), 2);
    let a = &occupancy[0];
    assert_eq!((a.building_id, a.total_capacity, a.occupied_beds), (a1.id, 6, 3));
    assert_eq!(a.occupancy_rate, 50.0);
    let b = &occupancy[1];
    assert_eq!((b.building_id, b.total_capacity, b.occupied_beds), (b1.id, 0, 0));
    assert_eq!(b.occupancy_rate, 0.0);

    let payments = app.dorm.stats.building_payments().await.unwrap();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].total_amount, 150.5);
    assert_eq!(payments[1].building_no, "B1");
    assert_eq!(payments[1].total_amount, 0.0);
}
