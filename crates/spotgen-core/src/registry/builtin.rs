//! Builtin spot definitions

use super::SpotRecord;

/// Spots generated when no registry is configured
pub(super) fn builtin_spots() -> Vec<SpotRecord> {
    vec![
        SpotRecord::new(
            "hossegor",
            "Ultra Forecast & Conditions | Hossegor",
            "Hossegor, France",
            "La Gravière",
        ),
        SpotRecord::new(
            "biarritz",
            "Ultra Forecast & Conditions | Biarritz",
            "Biarritz, France",
            "Côte des Basques",
        ),
        SpotRecord::new(
            "latorche",
            "Ultra Forecast & Conditions | La Torche",
            "La Torche, France",
            "Pointe de la Torche",
        ),
        SpotRecord::new(
            "seignosse",
            "Ultra Forecast & Conditions | Seignosse",
            "Seignosse, France",
            "Les Estagnots",
        ),
    ]
}
