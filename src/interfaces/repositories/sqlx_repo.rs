use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCategoryRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxServiceRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxWorkRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBookingRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSettingRepo {
    pub pool: PgPool,
}
