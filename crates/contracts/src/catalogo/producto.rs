use serde::{Deserialize, Serialize};

// ============================================================================
// Categoria
// ============================================================================

/// Categoría de producto. Solo `Galeria` lleva la dimensión de semanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Categoria {
    Grano,
    Galeria,
    Aseo,
}

impl Categoria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::Grano => "grano",
            Categoria::Galeria => "galeria",
            Categoria::Aseo => "aseo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grano" => Some(Categoria::Grano),
            "galeria" => Some(Categoria::Galeria),
            "aseo" => Some(Categoria::Aseo),
            _ => None,
        }
    }

    /// Etiqueta para mostrar en la UI.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Categoria::Grano => "Grano",
            Categoria::Galeria => "Galería",
            Categoria::Aseo => "Aseo",
        }
    }

    /// La dimensión semanal solo aplica a productos de galería.
    pub fn usa_semanas(&self) -> bool {
        matches!(self, Categoria::Galeria)
    }

    pub fn todas() -> [Categoria; 3] {
        [Categoria::Grano, Categoria::Galeria, Categoria::Aseo]
    }
}

impl std::fmt::Display for Categoria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Producto
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub categoria: Categoria,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Cuerpo de POST /productos/ y PUT /productos/{id}.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductoInput {
    pub nombre: String,
    pub categoria: String,
    pub descripcion: String,
}

/// Respuesta de GET /productos/stats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProductoStats {
    #[serde(default)]
    pub all: i64,
    #[serde(default)]
    pub grano: i64,
    #[serde(default)]
    pub galeria: i64,
    #[serde(default)]
    pub aseo: i64,
}

impl ProductoStats {
    /// Contador de la tarjeta correspondiente al filtro de categoría.
    pub fn para_filtro(&self, filtro: &str) -> i64 {
        match filtro {
            "grano" => self.grano,
            "galeria" => self.galeria,
            "aseo" => self.aseo,
            _ => self.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categoria_serde_en_minusculas() {
        assert_eq!(
            serde_json::to_string(&Categoria::Galeria).unwrap(),
            "\"galeria\""
        );
        let c: Categoria = serde_json::from_str("\"aseo\"").unwrap();
        assert_eq!(c, Categoria::Aseo);
    }

    #[test]
    fn solo_galeria_usa_semanas() {
        assert!(Categoria::Galeria.usa_semanas());
        assert!(!Categoria::Grano.usa_semanas());
        assert!(!Categoria::Aseo.usa_semanas());
    }

    #[test]
    fn parse_rechaza_categorias_desconocidas() {
        assert_eq!(Categoria::parse("grano"), Some(Categoria::Grano));
        assert_eq!(Categoria::parse("otro"), None);
    }
}
