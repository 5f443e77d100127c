//! Spanish dictionary.

use super::Entries;

pub(super) const ENTRIES: Entries = &[
    ("app.title", "Panel del Restaurante"),
    ("nav.dashboard", "Inicio"),
    ("nav.orders", "Pedidos"),
    ("nav.tables", "Mesas"),
    ("nav.payments", "Pagos"),
    ("nav.expenses", "Gastos"),
    ("nav.debts", "Deudas"),
    ("nav.employees", "Empleados"),
    ("nav.settings", "Configuración"),
    ("common.save", "Guardar"),
    ("common.cancel", "Cancelar"),
    ("common.discard", "Descartar cambios"),
    ("common.add", "Añadir"),
    ("common.edit", "Editar"),
    ("common.delete", "Eliminar"),
    ("common.search", "Buscar"),
    ("common.total", "Total"),
    ("common.loading", "Cargando..."),
    ("dashboard.greeting", "Hola, {name}"),
    ("dashboard.todaySales", "Ventas de hoy"),
    ("orders.title", "Pedidos"),
    ("orders.itemsCount", "{count} productos"),
    ("orders.status.ready", "Listo"),
    ("orders.status.served", "Servido"),
    ("orders.status.paymentPending", "Pago pendiente"),
    ("tables.title", "Mesas"),
    ("tables.tableNumber", "Mesa {number}"),
    ("tables.free", "Libre"),
    ("tables.occupied", "Ocupada"),
    ("payments.title", "Historial de pagos"),
    ("expenses.title", "Gastos"),
    ("debts.title", "Deudas"),
    ("debts.dueOn", "Vence el {date}"),
    ("employees.title", "Empleados"),
    ("settings.title", "Configuración"),
    ("settings.language", "Idioma"),
    ("settings.currency", "Moneda"),
    ("settings.fontSize", "Tamaño de letra"),
    ("settings.fontSize.small", "Pequeño"),
    ("settings.fontSize.medium", "Mediano"),
    ("settings.fontSize.large", "Grande"),
    ("settings.fontSize.extra-large", "Muy grande"),
    ("settings.pendingChanges", "Tienes cambios sin guardar"),
    ("settings.saved", "Configuración guardada"),
    ("settings.saveFailed", "No se pudo guardar la configuración"),
    ("settings.preview", "Vista previa: {amount}"),
    ("rates.loading", "Cargando tasas de cambio..."),
    ("rates.fallback", "Usando tasas de cambio de respaldo"),
    ("rates.asOf", "Tasas del {date}"),
    ("language.es", "Español"),
    ("language.en", "Inglés"),
    ("language.de", "Alemán"),
    ("currency.EUR", "Euro"),
    ("currency.USD", "Dólar estadounidense"),
    ("currency.COP", "Peso colombiano"),
];
