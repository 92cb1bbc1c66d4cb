//! Translation catalog
//!
//! Static English and Russian string tables keyed by the identifiers
//! the views use. Lookups that miss return `None`; the public `t`
//! falls back to the key itself.

pub(crate) fn en(key: &str) -> Option<&'static str> {
    let value = match key {
        // Navigation
        "guests" => "Guests",
        "guest" => "Guest",
        "tasks" => "Tasks",
        "profile" => "Profile",
        "aiAssistant" => "AI Assistant",

        // Guests view
        "all" => "All",
        "waiting" => "Waiting",
        "departed" => "Departed",
        "searchGuests" => "Search guests or rooms...",
        "noGuestsFound" => "No guests found",
        "noWaitingGuests" => "No waiting guests",
        "noDepartedGuests" => "No departed guests",

        // Guest card
        "guestDetails" => "Guest Details",
        "checkedIn" => "in house",
        "checkOut" => "Checked Out",
        "call" => "Call",
        "email" => "Email",
        "chat" => "Chat",
        "addMove" => "Add a Move",
        "transportation" => "Transportation",
        "vehicle" => "Vehicle",
        "licensePlate" => "License Plate",
        "parkingSpot" => "Parking Spot",
        "preferences" => "Preferences",
        "checkIn" => "Check-in",
        "checkOut2" => "Check-out",
        "personalCar" => "Personal Car",
        "taxi" => "Taxi",
        "transfer" => "Transfer",
        "movingTomorrow" => "Moving",

        // Status confirmation
        "confirmStatusChange" => "Confirm Status Change",
        "confirmStatusText" => "Are you sure you want to change the status of",
        "cancel" => "Cancel",
        "confirm" => "Confirm",

        // Profile
        "editProfile" => "Edit Profile",
        "tasksDone" => "Tasks Done",
        "activeGuests" => "Active Guests",
        "rating" => "Rating",
        "notifications" => "Notifications",
        "darkMode" => "Dark Mode",
        "language" => "Language",
        "settings" => "Settings",
        "privacySecurity" => "Privacy & Security",
        "helpSupport" => "Help & Support",
        "logOut" => "Log Out",
        "activityHistory" => "Activity History",
        "noActivityYet" => "No activity yet",

        // Tasks
        "pending" => "Pending",
        "inProgress" => "In Progress",
        "completed" => "Completed",
        "addTask" => "Add Task",
        "newTask" => "New Task",
        "high" => "High",
        "urgent" => "Urgent",
        "normal" => "Normal",
        "low" => "Low",
        "noTasks" => "No tasks",
        "noUrgentTasks" => "No urgent tasks",
        "mainTasks" => "Main Tasks",
        "officeTasks" => "Office",

        // Editing
        "edit" => "Edit",
        "save" => "Save",
        "ok" => "OK",
        "notes" => "Notes",
        "editTransportation" => "Edit Transportation",
        "editNotes" => "Edit Notes",
        "carMake" => "Car Make",
        "carModel" => "Car Model",
        "vehicleDetails" => "Vehicle Details",
        "companyName" => "Company Name",
        "driverName" => "Driver Name",
        "room" => "Room",
        "roomCategory" => "Room Category",
        "parking" => "Parking",
        "addGuest" => "Add Guest",
        "guestName" => "Guest Name",
        "adults" => "Adults",
        "children" => "Children",
        "infants" => "Infants",
        "phone" => "Phone",

        // Moves
        "move" => "Move",
        "moveDate" => "Move Date",
        "selectDate" => "Select Date",
        "comment" => "Comment",
        "addComment" => "Add a comment",
        "addAnotherMove" => "Add Another Move",
        "editMove" => "Edit Move",
        "moves" => "Moves",
        "noMovesYet" => "No moves scheduled yet",

        "archive" => "Archive",
        "close" => "Close",
        _ => return None,
    };
    Some(value)
}

pub(crate) fn ru(key: &str) -> Option<&'static str> {
    let value = match key {
        // Navigation
        "guests" => "Гости",
        "guest" => "Гость",
        "tasks" => "Задачи",
        "profile" => "Профиль",
        "aiAssistant" => "AI Ассистент",

        // Guests view
        "all" => "Все",
        "waiting" => "Ожидаются",
        "departed" => "Выехали",
        "searchGuests" => "Поиск гостей или номеров...",
        "noGuestsFound" => "Гости не найдены",
        "noWaitingGuests" => "Нет ожидающих гостей",
        "noDepartedGuests" => "Нет выехавших гостей",

        // Guest card
        "guestDetails" => "Данные гостя",
        "checkedIn" => "Проживают",
        "checkOut" => "Выехали",
        "call" => "Позвонить",
        "email" => "Email",
        "chat" => "Чат",
        "addMove" => "Добавить переезд",
        "transportation" => "Транспорт",
        "vehicle" => "Автомобиль",
        "licensePlate" => "Номер",
        "parkingSpot" => "Парковка",
        "preferences" => "Предпочтения",
        "checkIn" => "Заезд",
        "checkOut2" => "Выезд",
        "personalCar" => "Личный автомобиль",
        "taxi" => "Такси",
        "transfer" => "Трансфер",
        "movingTomorrow" => "Переезд",

        // Status confirmation
        "confirmStatusChange" => "Подтвердите изменение статуса",
        "confirmStatusText" => "Вы уверены, что хотите изменить статус",
        "cancel" => "Отмена",
        "confirm" => "Подтвердить",

        // Profile
        "editProfile" => "Редактировать профиль",
        "tasksDone" => "Выполнено задач",
        "activeGuests" => "Активных гостей",
        "rating" => "Рейтинг",
        "notifications" => "Уведомления",
        "darkMode" => "Темная тема",
        "language" => "Язык",
        "settings" => "Настройки",
        "privacySecurity" => "Конфиденциальность",
        "helpSupport" => "Помощь",
        "logOut" => "Выйти",
        "activityHistory" => "История действий",
        "noActivityYet" => "Пока нет активности",

        // Tasks
        "pending" => "Ожидание",
        "inProgress" => "В работе",
        "completed" => "Выполнено",
        "addTask" => "Добавить задачу",
        "newTask" => "Новая задача",
        "high" => "Высокий",
        "urgent" => "Срочно",
        "normal" => "Обычный",
        "low" => "Низкий",
        "noTasks" => "Нет задач",
        "noUrgentTasks" => "Нет срочных задач",
        "mainTasks" => "Основные",
        "officeTasks" => "Офис",

        // Editing
        "edit" => "Изменить",
        "save" => "Сохранить",
        "ok" => "ОК",
        "notes" => "Заметки",
        "editTransportation" => "Редактировать транспорт",
        "editNotes" => "Редактировать заметки",
        "carMake" => "Марка",
        "carModel" => "Модель",
        "vehicleDetails" => "Детали транспорта",
        "companyName" => "Название компании",
        "driverName" => "Имя водителя",
        "room" => "Номер",
        "roomCategory" => "Категория номера",
        "parking" => "Парковка",
        "addGuest" => "Добавить гостя",
        "guestName" => "Имя гостя",
        "adults" => "Взрослые",
        "children" => "Дети",
        "infants" => "Младенцы",
        "phone" => "Телефон",

        // Moves
        "move" => "Переезд",
        "moveDate" => "Дата переезда",
        "selectDate" => "Выберите дату",
        "comment" => "Комментарий",
        "addComment" => "Добавьте комментарий",
        "addAnotherMove" => "Добавить ещё один переезд",
        "editMove" => "Редактировать переезд",
        "moves" => "Переезды",
        "noMovesYet" => "Переездов пока не запланировано",

        "archive" => "Архив",
        "close" => "Закрыть",
        _ => return None,
    };
    Some(value)
}
