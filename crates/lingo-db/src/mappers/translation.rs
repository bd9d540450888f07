//! Translation record entity <-> model mapper

use lingo_core::entities::TranslationRecord;

use crate::models::TranslationModel;

impl From<TranslationModel> for TranslationRecord {
    fn from(model: TranslationModel) -> Self {
        TranslationRecord {
            id: model.id,
            user_id: model.user_id,
            source_text: model.source_text,
            translated_text: model.translated_text,
            source_lang: model.source_lang,
            target_lang: model.target_lang,
            created_at: model.created_at,
        }
    }
}
