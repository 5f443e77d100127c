//! German dictionary.

use super::Entries;

pub(super) const ENTRIES: Entries = &[
    ("app.title", "Restaurant-Dashboard"),
    ("nav.dashboard", "Start"),
    ("nav.orders", "Bestellungen"),
    ("nav.tables", "Tische"),
    ("nav.payments", "Zahlungen"),
    ("nav.expenses", "Ausgaben"),
    ("nav.debts", "Schulden"),
    ("nav.employees", "Mitarbeiter"),
    ("nav.settings", "Einstellungen"),
    ("common.save", "Speichern"),
    ("common.cancel", "Abbrechen"),
    ("common.discard", "Änderungen verwerfen"),
    ("common.add", "Hinzufügen"),
    ("common.edit", "Bearbeiten"),
    ("common.delete", "Löschen"),
    ("common.search", "Suchen"),
    ("common.total", "Gesamt"),
    ("common.loading", "Wird geladen..."),
    ("dashboard.greeting", "Hallo, {name}"),
    ("dashboard.todaySales", "Heutige Umsätze"),
    ("orders.title", "Bestellungen"),
    ("orders.itemsCount", "{count} Artikel"),
    ("orders.status.ready", "Fertig"),
    ("orders.status.served", "Serviert"),
    ("orders.status.paymentPending", "Zahlung ausstehend"),
    ("tables.title", "Tische"),
    ("tables.tableNumber", "Tisch {number}"),
    ("tables.free", "Frei"),
    ("tables.occupied", "Besetzt"),
    ("payments.title", "Zahlungsverlauf"),
    ("expenses.title", "Ausgaben"),
    ("debts.title", "Schulden"),
    ("debts.dueOn", "Fällig am {date}"),
    ("employees.title", "Mitarbeiter"),
    ("settings.title", "Einstellungen"),
    ("settings.language", "Sprache"),
    ("settings.currency", "Währung"),
    ("settings.fontSize", "Schriftgröße"),
    ("settings.fontSize.small", "Klein"),
    ("settings.fontSize.medium", "Mittel"),
    ("settings.fontSize.large", "Groß"),
    ("settings.fontSize.extra-large", "Sehr groß"),
    ("settings.pendingChanges", "Sie haben ungespeicherte Änderungen"),
    ("settings.saved", "Einstellungen gespeichert"),
    ("settings.saveFailed", "Einstellungen konnten nicht gespeichert werden"),
    ("settings.preview", "Vorschau: {amount}"),
    ("rates.loading", "Wechselkurse werden geladen..."),
    ("rates.fallback", "Ersatz-Wechselkurse werden verwendet"),
    ("rates.asOf", "Kurse vom {date}"),
    ("language.es", "Spanisch"),
    ("language.en", "Englisch"),
    ("language.de", "Deutsch"),
    ("currency.EUR", "Euro"),
    ("currency.USD", "US-Dollar"),
    ("currency.COP", "Kolumbianischer Peso"),
];
