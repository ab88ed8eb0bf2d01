//! Lookup tables: colors, product groups, print types, sewing lines and accessory notes.

use chrono::Utc;
use entity::{accessory_note, color, group, print, sewing_line};
use sea_orm::ActiveValue;

use crate::{
    model::catalog::{
        UpsertAccessoryNoteDto, UpsertColorDto, UpsertGroupDto, UpsertPrintDto,
        UpsertSewingLineDto,
    },
    server::model::resource::{common_column, common_columns, set, set_some, Resource},
};

impl Resource for color::Entity {
    type Entity = Self;
    type Model = color::Model;
    type ActiveModel = color::ActiveModel;
    type Column = color::Column;
    type Payload = UpsertColorDto;

    const NAME: &'static str = "Color";
    const REQUIRED: &'static [&'static str] = &["name"];

    common_columns!(color);

    fn column(field: &str) -> Option<color::Column> {
        Some(match field {
            "name" => color::Column::Name,
            "hexColor" => color::Column::HexColor,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertColorDto) -> color::ActiveModel {
        color::ActiveModel {
            name: set(dto.name),
            hex_color: set_some(dto.hex_color),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}

impl Resource for group::Entity {
    type Entity = Self;
    type Model = group::Model;
    type ActiveModel = group::ActiveModel;
    type Column = group::Column;
    type Payload = UpsertGroupDto;

    const NAME: &'static str = "Group";
    const REQUIRED: &'static [&'static str] = &["name"];

    common_columns!(group);

    fn column(field: &str) -> Option<group::Column> {
        match field {
            "name" => Some(group::Column::Name),
            _ => common_column::<Self>(field),
        }
    }

    fn into_changes(dto: UpsertGroupDto) -> group::ActiveModel {
        group::ActiveModel {
            name: set(dto.name),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}

impl Resource for print::Entity {
    type Entity = Self;
    type Model = print::Model;
    type ActiveModel = print::ActiveModel;
    type Column = print::Column;
    type Payload = UpsertPrintDto;

    const NAME: &'static str = "Print";
    const REQUIRED: &'static [&'static str] = &["name"];

    common_columns!(print);

    fn column(field: &str) -> Option<print::Column> {
        match field {
            "name" => Some(print::Column::Name),
            _ => common_column::<Self>(field),
        }
    }

    fn into_changes(dto: UpsertPrintDto) -> print::ActiveModel {
        print::ActiveModel {
            name: set(dto.name),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}

impl Resource for sewing_line::Entity {
    type Entity = Self;
    type Model = sewing_line::Model;
    type ActiveModel = sewing_line::ActiveModel;
    type Column = sewing_line::Column;
    type Payload = UpsertSewingLineDto;

    const NAME: &'static str = "Sewing line";
    const REQUIRED: &'static [&'static str] = &["name"];

    common_columns!(sewing_line);

    fn column(field: &str) -> Option<sewing_line::Column> {
        match field {
            "name" => Some(sewing_line::Column::Name),
            _ => common_column::<Self>(field),
        }
    }

    fn into_changes(dto: UpsertSewingLineDto) -> sewing_line::ActiveModel {
        sewing_line::ActiveModel {
            name: set(dto.name),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}

impl Resource for accessory_note::Entity {
    type Entity = Self;
    type Model = accessory_note::Model;
    type ActiveModel = accessory_note::ActiveModel;
    type Column = accessory_note::Column;
    type Payload = UpsertAccessoryNoteDto;

    const NAME: &'static str = "Accessory note";
    const REQUIRED: &'static [&'static str] = &["title"];

    common_columns!(accessory_note);

    fn column(field: &str) -> Option<accessory_note::Column> {
        Some(match field {
            "title" => accessory_note::Column::Title,
            "summary" => accessory_note::Column::Summary,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertAccessoryNoteDto) -> accessory_note::ActiveModel {
        accessory_note::ActiveModel {
            title: set(dto.title),
            summary: set_some(dto.summary),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}
