pub mod animal;
pub mod auth;
pub mod dashboard;
pub mod grupo;
pub mod iatf;
pub mod prediction;
pub mod report;
pub mod response;
pub mod semental;
pub mod user;

pub use animal::{Animal, AnimalEstadisticas, AnimalForm, AnimalListParams, EstadoReproductivo};
pub use auth::{AuthData, ChangePasswordData, LoginCredentials, RegisterData, UpdateProfileData};
pub use dashboard::{DashboardData, DashboardResumen, DistribucionGrupo, TopSemental};
pub use grupo::{Grupo, GrupoEstadisticas, GrupoForm};
pub use iatf::{
    CondicionOvarica, ConfirmarResultadoRequest, DisponibilidadAgua, EpocaAnio, IatfFilters,
    IatfForm, IatfRecord, ResultadoIatf, TratamientoPrevio,
};
pub use prediction::{NivelConfianza, Prediction, PredictionFilters, PredictionStats};
pub use report::{Reporte, ReportData, TipoReporte};
pub use response::{format_field_errors, ApiResponse, ListParams, Paginated};
pub use semental::{Semental, SementalForm};
pub use user::{Rol, User, UserFilters};
