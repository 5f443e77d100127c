//! English dictionary.

use super::Entries;

pub(super) const ENTRIES: Entries = &[
    ("app.title", "Restaurant Dashboard"),
    ("nav.dashboard", "Home"),
    ("nav.orders", "Orders"),
    ("nav.tables", "Tables"),
    ("nav.payments", "Payments"),
    ("nav.expenses", "Expenses"),
    ("nav.debts", "Debts"),
    ("nav.employees", "Employees"),
    ("nav.settings", "Settings"),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.discard", "Discard changes"),
    ("common.add", "Add"),
    ("common.edit", "Edit"),
    ("common.delete", "Delete"),
    ("common.search", "Search"),
    ("common.total", "Total"),
    ("common.loading", "Loading..."),
    ("dashboard.greeting", "Hello, {name}"),
    ("dashboard.todaySales", "Today's sales"),
    ("orders.title", "Orders"),
    ("orders.itemsCount", "{count} items"),
    ("orders.status.ready", "Ready"),
    ("orders.status.served", "Served"),
    ("orders.status.paymentPending", "Payment pending"),
    ("tables.title", "Tables"),
    ("tables.tableNumber", "Table {number}"),
    ("tables.free", "Free"),
    ("tables.occupied", "Occupied"),
    ("payments.title", "Payment history"),
    ("expenses.title", "Expenses"),
    ("debts.title", "Debts"),
    ("debts.dueOn", "Due on {date}"),
    ("employees.title", "Employees"),
    ("settings.title", "Settings"),
    ("settings.language", "Language"),
    ("settings.currency", "Currency"),
    ("settings.fontSize", "Font size"),
    ("settings.fontSize.small", "Small"),
    ("settings.fontSize.medium", "Medium"),
    ("settings.fontSize.large", "Large"),
    ("settings.fontSize.extra-large", "Extra large"),
    ("settings.pendingChanges", "You have unsaved changes"),
    ("settings.saved", "Settings saved"),
    ("settings.saveFailed", "Settings could not be saved"),
    ("settings.preview", "Preview: {amount}"),
    ("rates.loading", "Loading exchange rates..."),
    ("rates.fallback", "Using fallback exchange rates"),
    ("rates.asOf", "Rates as of {date}"),
    ("language.es", "Spanish"),
    ("language.en", "English"),
    ("language.de", "German"),
    ("currency.EUR", "Euro"),
    ("currency.USD", "US dollar"),
    ("currency.COP", "Colombian peso"),
];
