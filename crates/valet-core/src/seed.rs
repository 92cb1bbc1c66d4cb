//! Demo data
//!
//! The app ships with a seeded in-memory state: sixteen guests across
//! the in-house/waiting/departed statuses (one with a scheduled room
//! upgrade), ten service tasks split between guest rooms and the
//! office, and a short action history. There is no persistence layer;
//! this is the whole data source.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::guest::{Guest, GuestStatus, RoomCategory, RoomMove, Transportation};
use crate::history::{ActionCategory, ActionEntry};
use crate::task::{Priority, Task, TaskCategory, TaskStatus};

/// The reference "today" the seeded stay windows are built around.
/// Guest 501's upgrade move lands on the day after this.
pub fn demo_today() -> NaiveDate {
    date(2025, 11, 2)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All literals below are valid calendar dates
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn guest(
    name: &str,
    room: &str,
    room_category: RoomCategory,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: GuestStatus,
) -> Guest {
    Guest {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        room: room.to_string(),
        room_category,
        check_in,
        check_out,
        status,
        phone: String::new(),
        email: String::new(),
        preferences: None,
        transportation: Transportation::Transfer,
        car_make: None,
        car_model: None,
        license_plate: None,
        parking_spot: None,
        adults: 1,
        children: 0,
        infants: 0,
        moves: Vec::new(),
    }
}

fn contact(guest: &mut Guest, phone: &str, email: &str, preferences: &str) {
    guest.phone = phone.to_string();
    guest.email = email.to_string();
    guest.preferences = Some(preferences.to_string());
}

fn car(guest: &mut Guest, make: &str, model: &str, plate: &str, spot: Option<&str>) {
    guest.transportation = Transportation::Car;
    guest.car_make = Some(make.to_string());
    guest.car_model = Some(model.to_string());
    guest.license_plate = Some(plate.to_string());
    guest.parking_spot = spot.map(str::to_string);
}

fn ride(guest: &mut Guest, transportation: Transportation, operator: &str) {
    guest.transportation = transportation;
    guest.car_make = Some(operator.to_string());
}

fn party(guest: &mut Guest, adults: u8, children: u8, infants: u8) {
    guest.adults = adults;
    guest.children = children;
    guest.infants = infants;
}

pub fn demo_guests() -> Vec<Guest> {
    let mut guests = Vec::new();

    let mut g = guest(
        "Алексей Владимирович и Ольга Ивановна Смирновы",
        "501",
        RoomCategory::Dts,
        date(2025, 11, 1),
        date(2025, 11, 5),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 123-45-67", "smirnov@email.com", "Высокий этаж, тихий номер");
    car(&mut g, "Tesla", "Model S", "А123МР777", Some("P-15"));
    party(&mut g, 2, 0, 0);
    g.moves.push(
        RoomMove::new(date(2025, 11, 3), "601", RoomCategory::Dks)
            .with_comment("Upgrade to penthouse suite - переезд завтра"),
    );
    guests.push(g);

    let mut g = guest(
        "Андрей Петрович Сидоров",
        "312",
        RoomCategory::Dks,
        date(2025, 10, 30),
        date(2025, 11, 4),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 234-56-78", "sidorov@email.com", "Дополнительные подушки, без перьев");
    ride(&mut g, Transportation::Taxi, "City Taxi Co");
    guests.push(g);

    let mut g = guest(
        "Елена Сергеевна Иванова",
        "205",
        RoomCategory::Dts,
        date(2025, 11, 2),
        date(2025, 11, 6),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 345-67-89", "ivanova@email.com", "Для некурящих, вегетарианское меню");
    ride(&mut g, Transportation::Transfer, "VIP Transfer Service");
    party(&mut g, 1, 1, 0);
    guests.push(g);

    let mut g = guest(
        "Дмитрий Александрович Козлов",
        "410",
        RoomCategory::Dks,
        date(2025, 11, 3),
        date(2025, 11, 3),
        GuestStatus::Waiting,
    );
    contact(&mut g, "+7 (999) 456-78-90", "kozlov@email.com", "Запрос на ранний заезд");
    car(&mut g, "BMW", "7 Series", "В789КС777", None);
    party(&mut g, 2, 2, 1);
    guests.push(g);

    let mut g = guest(
        "Анна Викторовна Соколова",
        "103",
        RoomCategory::Dts,
        date(2025, 10, 28),
        date(2025, 11, 1),
        GuestStatus::Departed,
    );
    contact(&mut g, "+7 (999) 567-89-01", "sokolova@email.com", "Поздний выезд, ежедневная уборка");
    ride(&mut g, Transportation::Taxi, "Express Taxi");
    guests.push(g);

    let mut g = guest(
        "Игорь Николаевич и Мария Павловна Волковы",
        "302",
        RoomCategory::Dts,
        date(2025, 10, 29),
        date(2025, 11, 2),
        GuestStatus::Departed,
    );
    contact(&mut g, "+7 (999) 678-90-12", "volkov@email.com", "Большая кровать, вид на океан");
    car(&mut g, "Mercedes", "E-Class", "С456НТ777", Some("P-22"));
    party(&mut g, 2, 0, 0);
    guests.push(g);

    let mut g = guest(
        "Виктор Сергеевич Морозов",
        "217",
        RoomCategory::Dks,
        date(2025, 11, 1),
        date(2025, 11, 7),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 789-01-23", "morozov@email.com", "Номер с видом на парк");
    car(&mut g, "Audi", "A8", "Е789МК777", Some("P-08"));
    guests.push(g);

    let mut g = guest(
        "Татьяна Игоревна Белова",
        "425",
        RoomCategory::Dts,
        date(2025, 10, 31),
        date(2025, 11, 5),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 890-12-34", "belova@email.com", "Гипоаллергенное постельное белье");
    ride(&mut g, Transportation::Transfer, "Premium Transfer");
    party(&mut g, 2, 1, 1);
    guests.push(g);

    let mut g = guest(
        "Константин Павлович Орлов",
        "118",
        RoomCategory::Dks,
        date(2025, 11, 2),
        date(2025, 11, 8),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 901-23-45", "orlov@email.com", "Завтрак в номер, поздний выезд");
    ride(&mut g, Transportation::Taxi, "Comfort Taxi");
    guests.push(g);

    let mut g = guest(
        "Светлана Андреевна Кузнецова",
        "334",
        RoomCategory::Dts,
        date(2025, 11, 1),
        date(2025, 11, 4),
        GuestStatus::CheckedIn,
    );
    contact(&mut g, "+7 (999) 012-34-56", "kuznetsova@email.com", "Номер для некурящих, мини-бар без алкоголя");
    car(&mut g, "Lexus", "RX 350", "М234ВН777", Some("P-19"));
    party(&mut g, 1, 2, 0);
    guests.push(g);

    let mut g = guest(
        "Николай Викторович Лебедев",
        "507",
        RoomCategory::Dks,
        date(2025, 11, 3),
        date(2025, 11, 10),
        GuestStatus::Waiting,
    );
    contact(&mut g, "+7 (999) 123-45-78", "lebedev@email.com", "VIP-уровень обслуживания");
    car(&mut g, "Porsche", "Cayenne", "Н567ОР777", None);
    party(&mut g, 2, 0, 0);
    guests.push(g);

    let mut g = guest(
        "Ирина Олеговна Петрова",
        "221",
        RoomCategory::Dts,
        date(2025, 11, 3),
        date(2025, 11, 6),
        GuestStatus::Waiting,
    );
    contact(&mut g, "+7 (999) 234-56-89", "petrova@email.com", "Тихий номер, вдали от лифта");
    ride(&mut g, Transportation::Transfer, "Airport VIP Transfer");
    party(&mut g, 1, 1, 0);
    guests.push(g);

    let mut g = guest(
        "Сергей Анатольевич Федоров",
        "609",
        RoomCategory::Dks,
        date(2025, 11, 4),
        date(2025, 11, 9),
        GuestStatus::Waiting,
    );
    contact(&mut g, "+7 (999) 345-67-90", "fedorov@email.com", "Ранний заезд, номер на высоком этаже");
    ride(&mut g, Transportation::Taxi, "Elite Taxi Service");
    guests.push(g);

    let mut g = guest(
        "Мария Дмитриевна Новикова",
        "155",
        RoomCategory::Dts,
        date(2025, 10, 27),
        date(2025, 10, 31),
        GuestStatus::Departed,
    );
    contact(&mut g, "+7 (999) 456-78-01", "novikova@email.com", "Номер с балконом");
    car(&mut g, "Volvo", "XC90", "Р890СТ777", Some("P-27"));
    party(&mut g, 2, 2, 0);
    guests.push(g);

    let mut g = guest(
        "Артём Геннадьевич Романов",
        "418",
        RoomCategory::Dks,
        date(2025, 10, 28),
        date(2025, 11, 1),
        GuestStatus::Departed,
    );
    contact(&mut g, "+7 (999) 567-89-12", "romanov@email.com", "Доп. рабочее место в номере");
    ride(&mut g, Transportation::Transfer, "Business Transfer");
    guests.push(g);

    let mut g = guest(
        "Юлия Максимовна Захарова",
        "309",
        RoomCategory::Dts,
        date(2025, 10, 26),
        date(2025, 10, 30),
        GuestStatus::Departed,
    );
    contact(&mut g, "+7 (999) 678-90-23", "zakharova@email.com", "Утренний кофе в номер");
    ride(&mut g, Transportation::Taxi, "City Express Taxi");
    party(&mut g, 1, 1, 1);
    guests.push(g);

    guests
}

fn task(
    room: &str,
    guest_name: &str,
    request: &str,
    priority: Priority,
    status: TaskStatus,
    category: TaskCategory,
    time: &str,
    notes: &str,
) -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        room: room.to_string(),
        guest_name: guest_name.to_string(),
        request: request.to_string(),
        priority,
        status,
        category,
        time: time.to_string(),
        notes: Some(notes.to_string()),
        adults: 0,
        children: 0,
        infants: 0,
    }
}

pub fn demo_tasks() -> Vec<Task> {
    let mut tasks = vec![
        task(
            "501",
            "Андрей Петрович Сидоров",
            "Extra towels and pillows",
            Priority::Normal,
            TaskStatus::Pending,
            TaskCategory::Main,
            "10:30 AM",
            "Guest prefers hypoallergenic pillows",
        ),
        task(
            "312",
            "Елена Сергеевна Иванова",
            "Restaurant reservation for 2",
            Priority::High,
            TaskStatus::InProgress,
            TaskCategory::Main,
            "09:15 AM",
            "Preferred time: 7:30 PM, Italian cuisine",
        ),
        task(
            "205",
            "Дмитрий Александрович Козлов",
            "Airport transfer at 6:00 AM",
            Priority::Urgent,
            TaskStatus::Pending,
            TaskCategory::Main,
            "08:00 AM",
            "Flight at 8:30 AM, terminal 2",
        ),
        task(
            "410",
            "Анна Викторовна Соколова",
            "Room service breakfast",
            Priority::Normal,
            TaskStatus::Completed,
            TaskCategory::Main,
            "07:45 AM",
            "Continental breakfast delivered",
        ),
        task(
            "302",
            "Игорь Николаевич и Мария Павловна Волковы",
            "Laundry service - express",
            Priority::High,
            TaskStatus::InProgress,
            TaskCategory::Main,
            "11:20 AM",
            "3 suits, 5 shirts - needed by 4 PM",
        ),
        task(
            "Office",
            "Hotel Management",
            "Update guest database",
            Priority::Normal,
            TaskStatus::Pending,
            TaskCategory::Office,
            "02:00 PM",
            "Add new VIP guests to system",
        ),
        task(
            "Office",
            "Front Desk",
            "Prepare monthly report",
            Priority::High,
            TaskStatus::InProgress,
            TaskCategory::Office,
            "10:00 AM",
            "Due by end of day",
        ),
        task(
            "Office",
            "Housekeeping",
            "Inventory check - towels",
            Priority::Low,
            TaskStatus::Completed,
            TaskCategory::Office,
            "08:30 AM",
            "Completed and restocked",
        ),
        task(
            "501",
            "Алексей Владимирович и Ольга Ивановна Смирновы",
            "Champagne and flowers for anniversary",
            Priority::Urgent,
            TaskStatus::InProgress,
            TaskCategory::Main,
            "03:30 PM",
            "Moet & Chandon, red roses - deliver by 6 PM",
        ),
        task(
            "103",
            "Мария Дмитриевна Новикова",
            "Late checkout request",
            Priority::Low,
            TaskStatus::Completed,
            TaskCategory::Main,
            "09:00 AM",
            "Approved until 3 PM",
        ),
    ];

    tasks[0].adults = 2;
    tasks[0].children = 1;
    tasks[1].adults = 2;

    tasks
}

pub fn demo_history(now: DateTime<Utc>) -> Vec<ActionEntry> {
    vec![
        ActionEntry::new(
            "Task Completed",
            "Marked \"Airport transfer\" as completed",
            ActionCategory::Task,
        )
        .at(now - Duration::minutes(5)),
        ActionEntry::new(
            "Guest Status Updated",
            "Changed Дмитрий Козлов status to \"Checked In\"",
            ActionCategory::Guest,
        )
        .at(now - Duration::minutes(15)),
        ActionEntry::new(
            "New Task Added",
            "Added task \"Extra towels and pillows\" for room 501",
            ActionCategory::Task,
        )
        .at(now - Duration::minutes(45)),
        ActionEntry::new(
            "Guest Information Updated",
            "Updated transportation details for Елена Иванова",
            ActionCategory::Guest,
        )
        .at(now - Duration::hours(2)),
        ActionEntry::new(
            "Task Priority Changed",
            "Set \"Restaurant reservation\" to high priority",
            ActionCategory::Task,
        )
        .at(now - Duration::hours(4)),
    ]
}
