//! Per-product production stages, from material import to completion.

use async_trait::async_trait;
use chrono::Utc;
use entity::{
    accessory_note, completion, cutting_group, garment_accessory, garment_accessory_note,
    importation, product, sample_sewing, sewing_line, sewing_line_delivery,
};
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::production::{
        UpsertCompletionDto, UpsertCuttingGroupDto, UpsertGarmentAccessoryDto,
        UpsertGarmentAccessoryNoteDto, UpsertImportationDto, UpsertSampleSewingDto,
        UpsertSewingLineDeliveryDto,
    },
    server::{
        data::related::Embedder,
        error::AppError,
        model::{
            related::Embedded,
            resource::{
                common_column, common_columns, fill_common_defaults, set, set_some, Resource,
            },
        },
    },
};

/// Accessory note status assumed when a note is attached without one.
pub const DEFAULT_NOTE_STATUS: &str = "enough";

#[async_trait]
impl Resource for importation::Entity {
    type Entity = Self;
    type Model = importation::Model;
    type ActiveModel = importation::ActiveModel;
    type Column = importation::Column;
    type Payload = UpsertImportationDto;

    const NAME: &'static str = "Importation";
    const REQUIRED: &'static [&'static str] = &["productID"];

    common_columns!(importation);

    fn column(field: &str) -> Option<importation::Column> {
        Some(match field {
            "productID" => importation::Column::ProductId,
            "quantity" => importation::Column::Quantity,
            "dateImported" => importation::Column::DateImported,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertImportationDto) -> importation::ActiveModel {
        importation::ActiveModel {
            product_id: set(dto.product_id),
            quantity: set_some(dto.quantity),
            date_imported: set_some(dto.date_imported),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<importation::Model>,
    ) -> Result<Vec<Embedded<importation::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .into_rows())
    }
}

#[async_trait]
impl Resource for sample_sewing::Entity {
    type Entity = Self;
    type Model = sample_sewing::Model;
    type ActiveModel = sample_sewing::ActiveModel;
    type Column = sample_sewing::Column;
    type Payload = UpsertSampleSewingDto;

    const NAME: &'static str = "Sample sewing";
    const REQUIRED: &'static [&'static str] = &["productID"];

    common_columns!(sample_sewing);

    fn column(field: &str) -> Option<sample_sewing::Column> {
        use sample_sewing::Column;

        Some(match field {
            "productID" => Column::ProductId,
            "dateSubmissionNPL" => Column::DateSubmissionNpl,
            "dateApprovalSO" => Column::DateApprovalSo,
            "dateApprovalPP" => Column::DateApprovalPp,
            "dateSubmissionFirstTime" => Column::DateSubmissionFirstTime,
            "dateSubmissionSecondTime" => Column::DateSubmissionSecondTime,
            "dateSubmissionThirdTime" => Column::DateSubmissionThirdTime,
            "dateSubmissionForthTime" => Column::DateSubmissionFourthTime,
            "dateSubmissionFifthTime" => Column::DateSubmissionFifthTime,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertSampleSewingDto) -> sample_sewing::ActiveModel {
        sample_sewing::ActiveModel {
            product_id: set(dto.product_id),
            date_submission_npl: set_some(dto.date_submission_npl),
            date_approval_so: set_some(dto.date_approval_so),
            date_approval_pp: set_some(dto.date_approval_pp),
            date_submission_first_time: set_some(dto.date_submission_first_time),
            date_submission_second_time: set_some(dto.date_submission_second_time),
            date_submission_third_time: set_some(dto.date_submission_third_time),
            date_submission_fourth_time: set_some(dto.date_submission_fourth_time),
            date_submission_fifth_time: set_some(dto.date_submission_fifth_time),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<sample_sewing::Model>,
    ) -> Result<Vec<Embedded<sample_sewing::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .into_rows())
    }
}

#[async_trait]
impl Resource for cutting_group::Entity {
    type Entity = Self;
    type Model = cutting_group::Model;
    type ActiveModel = cutting_group::ActiveModel;
    type Column = cutting_group::Column;
    type Payload = UpsertCuttingGroupDto;

    const NAME: &'static str = "Cutting group";
    const REQUIRED: &'static [&'static str] = &["productID"];

    common_columns!(cutting_group);

    fn column(field: &str) -> Option<cutting_group::Column> {
        use cutting_group::Column;

        Some(match field {
            "productID" => Column::ProductId,
            "quantityRealCut" => Column::QuantityRealCut,
            "timeCut" => Column::TimeCut,
            "dateSendEmbroidered" => Column::DateSendEmbroidered,
            "quantityDeliveredBTP" => Column::QuantityDeliveredBtp,
            "dateArrived1Th" => Column::DateArrived1,
            "quantityArrived1Th" => Column::QuantityArrived1,
            "dateArrived2Th" => Column::DateArrived2,
            "quantityArrived2Th" => Column::QuantityArrived2,
            "dateArrived3Th" => Column::DateArrived3,
            "quantityArrived3Th" => Column::QuantityArrived3,
            "dateArrived4Th" => Column::DateArrived4,
            "quantityArrived4Th" => Column::QuantityArrived4,
            "dateArrived5Th" => Column::DateArrived5,
            "quantityArrived5Th" => Column::QuantityArrived5,
            "dateArrived6Th" => Column::DateArrived6,
            "quantityArrived6Th" => Column::QuantityArrived6,
            "dateArrived7Th" => Column::DateArrived7,
            "quantityArrived7Th" => Column::QuantityArrived7,
            "dateArrived8Th" => Column::DateArrived8,
            "quantityArrived8Th" => Column::QuantityArrived8,
            "dateArrived9Th" => Column::DateArrived9,
            "quantityArrived9Th" => Column::QuantityArrived9,
            "dateArrived10Th" => Column::DateArrived10,
            "quantityArrived10Th" => Column::QuantityArrived10,
            "syncStatus" => Column::SyncStatus,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertCuttingGroupDto) -> cutting_group::ActiveModel {
        cutting_group::ActiveModel {
            product_id: set(dto.product_id),
            quantity_real_cut: set_some(dto.quantity_real_cut),
            time_cut: set_some(dto.time_cut),
            date_send_embroidered: set_some(dto.date_send_embroidered),
            quantity_delivered_btp: set_some(dto.quantity_delivered_btp),
            date_arrived_1: set_some(dto.date_arrived_1),
            quantity_arrived_1: set_some(dto.quantity_arrived_1),
            date_arrived_2: set_some(dto.date_arrived_2),
            quantity_arrived_2: set_some(dto.quantity_arrived_2),
            date_arrived_3: set_some(dto.date_arrived_3),
            quantity_arrived_3: set_some(dto.quantity_arrived_3),
            date_arrived_4: set_some(dto.date_arrived_4),
            quantity_arrived_4: set_some(dto.quantity_arrived_4),
            date_arrived_5: set_some(dto.date_arrived_5),
            quantity_arrived_5: set_some(dto.quantity_arrived_5),
            date_arrived_6: set_some(dto.date_arrived_6),
            quantity_arrived_6: set_some(dto.quantity_arrived_6),
            date_arrived_7: set_some(dto.date_arrived_7),
            quantity_arrived_7: set_some(dto.quantity_arrived_7),
            date_arrived_8: set_some(dto.date_arrived_8),
            quantity_arrived_8: set_some(dto.quantity_arrived_8),
            date_arrived_9: set_some(dto.date_arrived_9),
            quantity_arrived_9: set_some(dto.quantity_arrived_9),
            date_arrived_10: set_some(dto.date_arrived_10),
            quantity_arrived_10: set_some(dto.quantity_arrived_10),
            sync_status: set(dto.sync_status),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn fill_defaults(model: &mut cutting_group::ActiveModel) {
        fill_common_defaults::<Self>(model);
        if !model.sync_status.is_set() {
            model.sync_status = ActiveValue::Set(false);
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<cutting_group::Model>,
    ) -> Result<Vec<Embedded<cutting_group::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .into_rows())
    }
}

#[async_trait]
impl Resource for sewing_line_delivery::Entity {
    type Entity = Self;
    type Model = sewing_line_delivery::Model;
    type ActiveModel = sewing_line_delivery::ActiveModel;
    type Column = sewing_line_delivery::Column;
    type Payload = UpsertSewingLineDeliveryDto;

    const NAME: &'static str = "Sewing line delivery";
    const REQUIRED: &'static [&'static str] = &["productID", "sewingLineID"];

    common_columns!(sewing_line_delivery);

    fn column(field: &str) -> Option<sewing_line_delivery::Column> {
        use sewing_line_delivery::Column;

        Some(match field {
            "productID" => Column::ProductId,
            "sewingLineID" => Column::SewingLineId,
            "quantityOriginal" => Column::QuantityOriginal,
            "quantitySewed" => Column::QuantitySewed,
            "expiredDate" => Column::ExpiredDate,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertSewingLineDeliveryDto) -> sewing_line_delivery::ActiveModel {
        sewing_line_delivery::ActiveModel {
            product_id: set(dto.product_id),
            sewing_line_id: set(dto.sewing_line_id),
            quantity_original: set_some(dto.quantity_original),
            quantity_sewed: set_some(dto.quantity_sewed),
            expired_date: set_some(dto.expired_date),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<sewing_line_delivery::Model>,
    ) -> Result<Vec<Embedded<sewing_line_delivery::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<sewing_line::Entity>(db, "sewingLine", |row| Some(row.sewing_line_id))
            .await?
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .into_rows())
    }
}

impl Resource for garment_accessory::Entity {
    type Entity = Self;
    type Model = garment_accessory::Model;
    type ActiveModel = garment_accessory::ActiveModel;
    type Column = garment_accessory::Column;
    type Payload = UpsertGarmentAccessoryDto;

    const NAME: &'static str = "Garment accessory";
    const REQUIRED: &'static [&'static str] = &["productID"];

    common_columns!(garment_accessory);

    fn column(field: &str) -> Option<garment_accessory::Column> {
        use garment_accessory::Column;

        Some(match field {
            "productID" => Column::ProductId,
            "amountCutting" => Column::AmountCutting,
            "passingDeliveryDate" => Column::PassingDeliveryDate,
            "syncStatus" => Column::SyncStatus,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertGarmentAccessoryDto) -> garment_accessory::ActiveModel {
        garment_accessory::ActiveModel {
            product_id: set(dto.product_id),
            amount_cutting: set_some(dto.amount_cutting),
            passing_delivery_date: set_some(dto.passing_delivery_date),
            sync_status: set(dto.sync_status),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn fill_defaults(model: &mut garment_accessory::ActiveModel) {
        fill_common_defaults::<Self>(model);
        if !model.sync_status.is_set() {
            model.sync_status = ActiveValue::Set(false);
        }
    }
}

#[async_trait]
impl Resource for garment_accessory_note::Entity {
    type Entity = Self;
    type Model = garment_accessory_note::Model;
    type ActiveModel = garment_accessory_note::ActiveModel;
    type Column = garment_accessory_note::Column;
    type Payload = UpsertGarmentAccessoryNoteDto;

    const NAME: &'static str = "Garment accessory note";
    const REQUIRED: &'static [&'static str] = &["productID", "accessoryNoteID"];

    common_columns!(garment_accessory_note);

    fn column(field: &str) -> Option<garment_accessory_note::Column> {
        use garment_accessory_note::Column;

        Some(match field {
            "productID" => Column::ProductId,
            "accessoryNoteID" => Column::AccessoryNoteId,
            "garmentAccessoryID" => Column::GarmentAccessoryId,
            "noteStatus" => Column::NoteStatus,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertGarmentAccessoryNoteDto) -> garment_accessory_note::ActiveModel {
        garment_accessory_note::ActiveModel {
            product_id: set(dto.product_id),
            accessory_note_id: set(dto.accessory_note_id),
            garment_accessory_id: set_some(dto.garment_accessory_id),
            note_status: set(dto.note_status),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn fill_defaults(model: &mut garment_accessory_note::ActiveModel) {
        fill_common_defaults::<Self>(model);
        if !model.note_status.is_set() {
            model.note_status = ActiveValue::Set(DEFAULT_NOTE_STATUS.to_string());
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<garment_accessory_note::Model>,
    ) -> Result<Vec<Embedded<garment_accessory_note::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<accessory_note::Entity>(db, "accessoryNote", |row| Some(row.accessory_note_id))
            .await?
            .attach::<garment_accessory::Entity>(db, "garmentAccessory", |row| row.garment_accessory_id)
            .await?
            .into_rows())
    }
}

#[async_trait]
impl Resource for completion::Entity {
    type Entity = Self;
    type Model = completion::Model;
    type ActiveModel = completion::ActiveModel;
    type Column = completion::Column;
    type Payload = UpsertCompletionDto;

    const NAME: &'static str = "Completion";
    const REQUIRED: &'static [&'static str] = &["productID"];

    common_columns!(completion);

    fn column(field: &str) -> Option<completion::Column> {
        use completion::Column;

        Some(match field {
            "productID" => Column::ProductId,
            "quantityIroned" => Column::QuantityIroned,
            "quantityCheckPassed" => Column::QuantityCheckPassed,
            "quantityPackaged" => Column::QuantityPackaged,
            "exportedDate" => Column::ExportedDate,
            "passFIDate" => Column::PassFiDate,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertCompletionDto) -> completion::ActiveModel {
        completion::ActiveModel {
            product_id: set(dto.product_id),
            quantity_ironed: set_some(dto.quantity_ironed),
            quantity_check_passed: set_some(dto.quantity_check_passed),
            quantity_packaged: set_some(dto.quantity_packaged),
            exported_date: set_some(dto.exported_date),
            pass_fi_date: set_some(dto.pass_fi_date),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<completion::Model>,
    ) -> Result<Vec<Embedded<completion::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .into_rows())
    }
}
