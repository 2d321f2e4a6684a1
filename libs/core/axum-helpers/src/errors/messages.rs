//! Standard error messages shared by every route.

pub const INTERNAL_ERROR: &str = "Error interno del servidor";
pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
pub const METHOD_NOT_ALLOWED: &str = "Método no permitido";
pub const INVALID_ID: &str = "ID inválido";
pub const INVALID_BODY: &str = "Cuerpo de la petición inválido";
