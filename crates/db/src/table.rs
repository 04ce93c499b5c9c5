use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum HealthProfile {
    Table,
    UserId,
    Condition,
    Allergies,
    Diet,
    Weight,
    Height,
    Age,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ScanHistory {
    Table,
    Id,
    UserId,
    Barcode,
    ProductName,
    ScannedAt,
}
