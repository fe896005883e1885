use super::{type_term, RecordContext};
use fzeri_core::identity::{file_path_key, term_key};
use fzeri_core::vocab::{base, crm, fabio, fentry, frbr};
use fzeri_core::{Emitter, FlatGroup};

/// Digital reproductions. Repetitions without a usable `FTAN` file name are
/// skipped.
pub(super) fn map_digital_image(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let entry = &ctx.entry;
    let photo = &ctx.photo;
    let images = photo.child("dimage");

    for rep in group.repetitions() {
        let Some(file) = rep
            .get("FTAN")
            .and_then(|name| file_path_key(base::DIGITAL_IMAGE, name))
        else {
            continue;
        };

        let image = images.child(&rep.index.to_string());
        out.typed(&image, crm::E38_IMAGE);
        out.typed(&image, fabio::DIGITAL_MANIFESTATION);
        out.relate(entry, fentry::DESCRIBES, &image);
        out.relate(photo, fabio::HAS_MANIFESTATION, &image);
        out.link(&image, crm::P138_REPRESENTS, photo);

        out.typed(&file, crm::E38_IMAGE);
        out.typed(&file, fabio::COMPUTER_FILE);
        out.relate(&file, frbr::EXEMPLAR, &image);
        out.relate(entry, fentry::DESCRIBES, &file);
        out.link(&file, crm::P138_REPRESENTS, &image);

        if let Some(note) = rep.get("FTAT") {
            out.literal(&image, crm::P3_HAS_NOTE, note);
        }
        if let Some(kind) = rep.get("FTAP") {
            let image_type = term_key(base::PHOTO_TYPE, kind);
            type_term(out, &image_type, kind);
            out.link(&image, crm::P2_HAS_TYPE, &image_type);
        }
    }
}
