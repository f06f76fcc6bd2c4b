use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建员工表（主键即身份提供方的用户 ID）
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(ColumnDef::new(Employees::Department).string().not_null())
                    .col(ColumnDef::new(Employees::Role).string().not_null())
                    .col(
                        ColumnDef::new(Employees::IsManager)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Employees::IsLead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Employees::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Employees::Phone).string().null())
                    .col(ColumnDef::new(Employees::ProfilePictureUrl).string().null())
                    .col(ColumnDef::new(Employees::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Employees::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建员工关系表（有向带类型边）
        manager
            .create_table(
                Table::create()
                    .table(EmployeeRelations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeRelations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeRelations::FromId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmployeeRelations::ToId).string().not_null())
                    .col(
                        ColumnDef::new(EmployeeRelations::RelationType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeRelations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeeRelations::Table, EmployeeRelations::FromId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeeRelations::Table, EmployeeRelations::ToId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建入职申请表
        manager
            .create_table(
                Table::create()
                    .table(OnboardingRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnboardingRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(OnboardingRequests::Email).string().not_null())
                    .col(
                        ColumnDef::new(OnboardingRequests::FirstName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::LastName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::Department)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OnboardingRequests::Role).string().not_null())
                    // 身份提供方的角色声明快照，审批落库时转为员工的 is_admin
                    .col(
                        ColumnDef::new(OnboardingRequests::AuthRole)
                            .string()
                            .not_null()
                            .default("employee"),
                    )
                    .col(ColumnDef::new(OnboardingRequests::Phone).string().null())
                    .col(
                        ColumnDef::new(OnboardingRequests::IsManager)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::IsLead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::ManagerName)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::ProfilePictureUrl)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::ApprovedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::ApprovedBy)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingRequests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建表单表（问题列表整体存为 JSON 文本）
        manager
            .create_table(
                Table::create()
                    .table(Forms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Forms::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Forms::Title).string().not_null())
                    .col(ColumnDef::new(Forms::Description).text().null())
                    .col(ColumnDef::new(Forms::Questions).text().not_null())
                    .col(ColumnDef::new(Forms::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Forms::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评估任务表（目标快照按列反规范化）
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::FormId).string().not_null())
                    .col(ColumnDef::new(Assignments::EmployeeId).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::EmployeeEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::TargetType).string().null())
                    .col(ColumnDef::new(Assignments::TargetId).string().null())
                    .col(ColumnDef::new(Assignments::TargetName).string().null())
                    .col(ColumnDef::new(Assignments::TargetRole).string().null())
                    .col(ColumnDef::new(Assignments::TargetDepartment).string().null())
                    .col(
                        ColumnDef::new(Assignments::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::FormId)
                            .to(Forms::Table, Forms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建表单回复表
        // 注意：不加 assignment 外键，员工删除后回复记录整体保留用于审计
        manager
            .create_table(
                Table::create()
                    .table(FormResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FormResponses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FormResponses::AssignmentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormResponses::ResponderId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FormResponses::Answers).text().not_null())
                    .col(
                        ColumnDef::new(FormResponses::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::CourseType).string().not_null())
                    .col(ColumnDef::new(Courses::Status).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建员工课程关联表
        manager
            .create_table(
                Table::create()
                    .table(EmployeeCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeCourses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeCourses::EmployeeId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeCourses::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmployeeCourses::Status).string().not_null())
                    .col(
                        ColumnDef::new(EmployeeCourses::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeCourses::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeCourses::CompletedAt)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeeCourses::Table, EmployeeCourses::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EmployeeCourses::Table, EmployeeCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 关系表唯一约束：同一对员工之间同类型边只允许一条（upsert 的依据）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_relations_unique_edge")
                    .table(EmployeeRelations::Table)
                    .col(EmployeeRelations::FromId)
                    .col(EmployeeRelations::ToId)
                    .col(EmployeeRelations::RelationType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_relations_to_id")
                    .table(EmployeeRelations::Table)
                    .col(EmployeeRelations::ToId)
                    .to_owned(),
            )
            .await?;

        // 员工表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_department")
                    .table(Employees::Table)
                    .col(Employees::Department)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_is_admin")
                    .table(Employees::Table)
                    .col(Employees::IsAdmin)
                    .to_owned(),
            )
            .await?;

        // 评估任务表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_employee_id")
                    .table(Assignments::Table)
                    .col(Assignments::EmployeeId)
                    .to_owned(),
            )
            .await?;

        // 回复表唯一约束：同一回复人对同一任务只允许一条回复
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_form_responses_unique_responder")
                    .table(FormResponses::Table)
                    .col(FormResponses::AssignmentId)
                    .col(FormResponses::ResponderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 员工课程表唯一约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_courses_unique_pair")
                    .table(EmployeeCourses::Table)
                    .col(EmployeeCourses::EmployeeId)
                    .col(EmployeeCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 入职申请表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_onboarding_requests_status")
                    .table(OnboardingRequests::Table)
                    .col(OnboardingRequests::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(EmployeeCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormResponses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Forms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OnboardingRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeRelations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Department,
    Role,
    IsManager,
    IsLead,
    IsAdmin,
    Phone,
    ProfilePictureUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EmployeeRelations {
    Table,
    Id,
    FromId,
    ToId,
    RelationType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum OnboardingRequests {
    Table,
    Id,
    UserId,
    Email,
    FirstName,
    LastName,
    Department,
    Role,
    AuthRole,
    Phone,
    IsManager,
    IsLead,
    ManagerName,
    ProfilePictureUrl,
    Status,
    ApprovedAt,
    ApprovedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Forms {
    Table,
    Id,
    Title,
    Description,
    Questions,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    FormId,
    EmployeeId,
    EmployeeEmail,
    TargetType,
    TargetId,
    TargetName,
    TargetRole,
    TargetDepartment,
    AssignedAt,
}

#[derive(DeriveIden)]
enum FormResponses {
    Table,
    Id,
    AssignmentId,
    ResponderId,
    Answers,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Description,
    CourseType,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EmployeeCourses {
    Table,
    Id,
    EmployeeId,
    CourseId,
    Status,
    AssignedAt,
    UpdatedAt,
    CompletedAt,
}
