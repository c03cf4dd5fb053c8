use kernel::model::{
    enrollment::{Address, Enrollment},
    id::{AddressId, EnrollmentId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

// enrollments と addresses を LEFT JOIN した結果を受け取る型
// 住所が未登録の場合、address_ 系の列はすべて NULL になる
#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub id: EnrollmentId,
    pub name: String,
    pub cpf: String,
    pub birthday: DateTime<Utc>,
    pub phone: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address_id: Option<AddressId>,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub address_detail: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            id,
            name,
            cpf,
            birthday,
            phone,
            user_id,
            created_at,
            updated_at,
            address_id,
            cep,
            street,
            city,
            state,
            number,
            neighborhood,
            address_detail,
        } = value;
        let address = address_id.map(|address_id| Address {
            id: address_id,
            cep: cep.unwrap_or_default(),
            street: street.unwrap_or_default(),
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            number: number.unwrap_or_default(),
            neighborhood: neighborhood.unwrap_or_default(),
            address_detail,
        });
        Enrollment {
            id,
            name,
            cpf,
            birthday,
            phone,
            user_id,
            address,
            created_at,
            updated_at,
        }
    }
}
