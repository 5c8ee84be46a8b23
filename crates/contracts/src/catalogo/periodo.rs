use serde::{Deserialize, Serialize};

/// Ciclo mensual. Las semanas cuelgan de él vía /periodos/{id}/semanas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Periodo {
    pub id: i64,
    pub nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(default)]
    pub activo: bool,
}

/// Cuerpo de POST /periodos/ y PUT /periodos/{id}.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodoInput {
    pub nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semana {
    pub id: i64,
    pub periodo_id: i64,
    pub numero: i64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

/// Cuerpo de POST /periodos/{id}/semanas y PUT /periodos/semanas/{id}.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemanaInput {
    pub periodo_id: i64,
    pub numero: i64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}
