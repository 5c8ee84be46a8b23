/// Confirmación nativa del navegador antes de un borrado. Devuelve
/// `false` si no hay ventana disponible.
pub fn confirmar(mensaje: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(mensaje).ok())
        .unwrap_or(false)
}
