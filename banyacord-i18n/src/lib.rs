#[cfg(all(feature = "uk", feature = "en"))]
compile_error!("Cannot enable both 'uk' and 'en' features at the same time");

#[cfg(feature = "uk")]
pub mod strings {
    pub const MENU_PROMPT: &str = "Привіт! Я бот для розрахунку витрат на баню. Вибери дію:";
    pub const NAME_PROMPT: &str = "Введи ім'я учасника:";
    pub const REMOVAL_PROMPT: &str = "Кого видалити зі списку?";
    pub const ATTENDANCE_PROMPT: &str = "Хто був у бані? Натискай, щоб відмітити:";
    pub const DRINKERS_PROMPT: &str = "Хто пив алкоголь? Натискай, щоб відмітити:";
    pub const EXPENSE_PARTICIPANT_PROMPT: &str = "Хто платив?";
    pub const BATH_COST_PROMPT: &str = "Введи вартість бані:";
    pub const ROSTER_HEADER: &str = "Учасники:";
    pub const ROSTER_EMPTY: &str = "Список учасників порожній.";

    pub const BTN_ADD_PARTICIPANT: &str = "➕ Додати учасника";
    pub const BTN_REMOVE_PARTICIPANT: &str = "❌ Видалити учасника";
    pub const BTN_LIST_PARTICIPANTS: &str = "👥 Список учасників";
    pub const BTN_START_ROUND: &str = "🔄 Новий захід";
    pub const BTN_ADD_EXPENSE: &str = "💰 Додати витрати";
    pub const BTN_SET_BATH_COST: &str = "🔥 Вартість бані";
    pub const BTN_SETTLE: &str = "📊 Розрахувати витрати";
    pub const BTN_DONE: &str = "✅ Готово";
    pub const BTN_CANCEL: &str = "↩️ Назад";
    pub const BTN_FOOD: &str = "🍗 Їжа";
    pub const BTN_ALCOHOL: &str = "🍾 Алкоголь";

    pub const CATEGORY_FOOD: &str = "їжа";
    pub const CATEGORY_ALCOHOL: &str = "алкоголь";

    pub const TOTAL_SPENT: &str = "Загальні витрати";
    pub const TOTAL_FOOD: &str = "Їжа";
    pub const TOTAL_ALCOHOL: &str = "Алкоголь";
    pub const BATH_COST: &str = "Баня";
    pub const PER_PERSON: &str = "на особу";
    pub const PAID: &str = "заплатив(ла)";
    pub const OWES: &str = "винен(на)";
    pub const REFUND: &str = "отримує";

    pub const EMPTY_NAME: &str = "⚠️ Ім'я не може бути порожнім.";
    pub const EMPTY_REGISTRY: &str = "⚠️ Спочатку додай хоча б одного учасника.";
    pub const NO_ATTENDANCE_YET: &str = "⚠️ Спочатку відміть, хто був у бані.";
    pub const EMPTY_ATTENDANCE: &str = "⚠️ Ніхто не відмічений. Відміть хоча б одного.";
    pub const BATH_COST_UNSET: &str = "⚠️ Спочатку введи вартість бані.";
    pub const NOT_FOUND: &str = "⚠️ Такого учасника немає в списку.";
    pub const UNKNOWN_COMMAND: &str = "⚠️ Ця кнопка вже не активна. Скористайся меню.";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MENU_PROMPT: &str = "Hi! I split bath-house expenses. Pick an action:";
    pub const NAME_PROMPT: &str = "Enter the participant's name:";
    pub const REMOVAL_PROMPT: &str = "Who should be removed?";
    pub const ATTENDANCE_PROMPT: &str = "Who attended? Tap to toggle:";
    pub const DRINKERS_PROMPT: &str = "Who shared the alcohol? Tap to toggle:";
    pub const EXPENSE_PARTICIPANT_PROMPT: &str = "Who paid?";
    pub const BATH_COST_PROMPT: &str = "Enter the bath cost:";
    pub const ROSTER_HEADER: &str = "Participants:";
    pub const ROSTER_EMPTY: &str = "The participant list is empty.";

    pub const BTN_ADD_PARTICIPANT: &str = "➕ Add participant";
    pub const BTN_REMOVE_PARTICIPANT: &str = "❌ Remove participant";
    pub const BTN_LIST_PARTICIPANTS: &str = "👥 List participants";
    pub const BTN_START_ROUND: &str = "🔄 New round";
    pub const BTN_ADD_EXPENSE: &str = "💰 Add expense";
    pub const BTN_SET_BATH_COST: &str = "🔥 Bath cost";
    pub const BTN_SETTLE: &str = "📊 Settle up";
    pub const BTN_DONE: &str = "✅ Done";
    pub const BTN_CANCEL: &str = "↩️ Back";
    pub const BTN_FOOD: &str = "🍗 Food";
    pub const BTN_ALCOHOL: &str = "🍾 Alcohol";

    pub const CATEGORY_FOOD: &str = "food";
    pub const CATEGORY_ALCOHOL: &str = "alcohol";

    pub const TOTAL_SPENT: &str = "Total spent";
    pub const TOTAL_FOOD: &str = "Food";
    pub const TOTAL_ALCOHOL: &str = "Alcohol";
    pub const BATH_COST: &str = "Bath";
    pub const PER_PERSON: &str = "per person";
    pub const PAID: &str = "paid";
    pub const OWES: &str = "owes";
    pub const REFUND: &str = "gets back";

    pub const EMPTY_NAME: &str = "⚠️ The name cannot be empty.";
    pub const EMPTY_REGISTRY: &str = "⚠️ Add at least one participant first.";
    pub const NO_ATTENDANCE_YET: &str = "⚠️ Mark who attended first.";
    pub const EMPTY_ATTENDANCE: &str = "⚠️ Nobody is marked. Toggle at least one participant.";
    pub const BATH_COST_UNSET: &str = "⚠️ Set the bath cost first.";
    pub const NOT_FOUND: &str = "⚠️ That participant is not on the list.";
    pub const UNKNOWN_COMMAND: &str = "⚠️ That button is no longer active. Use the menu.";
}

#[cfg(not(any(feature = "uk", feature = "en")))]
pub mod strings {
    pub const MENU_PROMPT: &str = "Hi! I split bath-house expenses. Pick an action:";
    pub const NAME_PROMPT: &str = "Enter the participant's name:";
    pub const REMOVAL_PROMPT: &str = "Who should be removed?";
    pub const ATTENDANCE_PROMPT: &str = "Who attended? Tap to toggle:";
    pub const DRINKERS_PROMPT: &str = "Who shared the alcohol? Tap to toggle:";
    pub const EXPENSE_PARTICIPANT_PROMPT: &str = "Who paid?";
    pub const BATH_COST_PROMPT: &str = "Enter the bath cost:";
    pub const ROSTER_HEADER: &str = "Participants:";
    pub const ROSTER_EMPTY: &str = "The participant list is empty.";

    pub const BTN_ADD_PARTICIPANT: &str = "➕ Add participant";
    pub const BTN_REMOVE_PARTICIPANT: &str = "❌ Remove participant";
    pub const BTN_LIST_PARTICIPANTS: &str = "👥 List participants";
    pub const BTN_START_ROUND: &str = "🔄 New round";
    pub const BTN_ADD_EXPENSE: &str = "💰 Add expense";
    pub const BTN_SET_BATH_COST: &str = "🔥 Bath cost";
    pub const BTN_SETTLE: &str = "📊 Settle up";
    pub const BTN_DONE: &str = "✅ Done";
    pub const BTN_CANCEL: &str = "↩️ Back";
    pub const BTN_FOOD: &str = "🍗 Food";
    pub const BTN_ALCOHOL: &str = "🍾 Alcohol";

    pub const CATEGORY_FOOD: &str = "food";
    pub const CATEGORY_ALCOHOL: &str = "alcohol";

    pub const TOTAL_SPENT: &str = "Total spent";
    pub const TOTAL_FOOD: &str = "Food";
    pub const TOTAL_ALCOHOL: &str = "Alcohol";
    pub const BATH_COST: &str = "Bath";
    pub const PER_PERSON: &str = "per person";
    pub const PAID: &str = "paid";
    pub const OWES: &str = "owes";
    pub const REFUND: &str = "gets back";

    pub const EMPTY_NAME: &str = "⚠️ The name cannot be empty.";
    pub const EMPTY_REGISTRY: &str = "⚠️ Add at least one participant first.";
    pub const NO_ATTENDANCE_YET: &str = "⚠️ Mark who attended first.";
    pub const EMPTY_ATTENDANCE: &str = "⚠️ Nobody is marked. Toggle at least one participant.";
    pub const BATH_COST_UNSET: &str = "⚠️ Set the bath cost first.";
    pub const NOT_FOUND: &str = "⚠️ That participant is not on the list.";
    pub const UNKNOWN_COMMAND: &str = "⚠️ That button is no longer active. Use the menu.";
}

pub use strings::*;

#[cfg(feature = "uk")]
pub fn participant_added(name: impl std::fmt::Display) -> String {
    format!("✅ Учасник {name} доданий!")
}

#[cfg(feature = "uk")]
pub fn participant_removed(name: impl std::fmt::Display) -> String {
    format!("❌ Учасник {name} видалений зі списку.")
}

#[cfg(feature = "uk")]
pub fn duplicate_name(name: impl std::fmt::Display) -> String {
    format!("⚠️ Учасник {name} вже є в списку.")
}

#[cfg(feature = "uk")]
pub fn category_prompt(name: impl std::fmt::Display) -> String {
    format!("За що платив(ла) {name}?")
}

#[cfg(feature = "uk")]
pub fn amount_prompt(name: impl std::fmt::Display, category: &str) -> String {
    format!("Скільки {name} витратив(ла) на {category}? Введи суму:")
}

#[cfg(feature = "uk")]
pub fn expense_recorded(name: impl std::fmt::Display, category: &str, amount: f64) -> String {
    format!("✅ Витрата {amount} на {category} записана за {name}.")
}

#[cfg(feature = "uk")]
pub fn bath_cost_set(amount: f64) -> String {
    format!("✅ Вартість бані: {amount}.")
}

#[cfg(feature = "uk")]
pub fn round_started(attendees: usize, drinkers: usize) -> String {
    format!("✅ Захід розпочато: {attendees} відвідувачів, {drinkers} п'ють. Витрати обнулені.")
}

#[cfg(feature = "uk")]
pub fn invalid_amount(input: impl std::fmt::Display) -> String {
    format!("⚠️ «{input}» не схоже на суму. Введи додатне число, наприклад: 500")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn participant_added(name: impl std::fmt::Display) -> String {
    format!("✅ {name} added!")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn participant_removed(name: impl std::fmt::Display) -> String {
    format!("❌ {name} removed from the list.")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn duplicate_name(name: impl std::fmt::Display) -> String {
    format!("⚠️ {name} is already on the list.")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn category_prompt(name: impl std::fmt::Display) -> String {
    format!("What did {name} pay for?")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn amount_prompt(name: impl std::fmt::Display, category: &str) -> String {
    format!("How much did {name} spend on {category}? Enter the amount:")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn expense_recorded(name: impl std::fmt::Display, category: &str, amount: f64) -> String {
    format!("✅ Recorded {amount} on {category} for {name}.")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn bath_cost_set(amount: f64) -> String {
    format!("✅ Bath cost set to {amount}.")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn round_started(attendees: usize, drinkers: usize) -> String {
    format!("✅ Round started: {attendees} attendees, {drinkers} drinking. Expenses reset.")
}

#[cfg(any(feature = "en", not(any(feature = "uk", feature = "en"))))]
pub fn invalid_amount(input: impl std::fmt::Display) -> String {
    format!("⚠️ \"{input}\" does not look like an amount. Enter a positive number, e.g. 500")
}
