/// PCB layers exported from KiCad and mapped onto the Blender template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    TopCopper,
    BottomCopper,
    TopSilk,
    BottomSilk,
    TopSoldermask,
    BottomSoldermask,
    TopPaste,
    BottomPaste,
    BoardOutline,
}

impl LayerType {
    pub fn all() -> Vec<Self> {
        vec![
            Self::TopCopper,
            Self::BottomCopper,
            Self::TopSilk,
            Self::BottomSilk,
            Self::TopSoldermask,
            Self::BottomSoldermask,
            Self::TopPaste,
            Self::BottomPaste,
            Self::BoardOutline,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TopCopper => "Top Copper",
            Self::BottomCopper => "Bottom Copper",
            Self::TopSilk => "Top Silkscreen",
            Self::BottomSilk => "Bottom Silkscreen",
            Self::TopSoldermask => "Top Soldermask",
            Self::BottomSoldermask => "Bottom Soldermask",
            Self::TopPaste => "Top Paste",
            Self::BottomPaste => "Bottom Paste",
            Self::BoardOutline => "Board Outline",
        }
    }

    /// Layer name as KiCad spells it, used with `kicad-cli --layers`
    pub fn kicad_name(&self) -> &'static str {
        match self {
            Self::TopCopper => "F.Cu",
            Self::BottomCopper => "B.Cu",
            Self::TopSilk => "F.SilkS",
            Self::BottomSilk => "B.SilkS",
            Self::TopSoldermask => "F.Mask",
            Self::BottomSoldermask => "B.Mask",
            Self::TopPaste => "F.Paste",
            Self::BottomPaste => "B.Paste",
            Self::BoardOutline => "Edge.Cuts",
        }
    }

    /// Filename token for exported SVGs and textures.
    ///
    /// The Blender template matches textures against this suffix, so the
    /// texture for `F.Cu` must be named `<board>-F_Cu.png`.
    pub fn file_token(&self) -> &'static str {
        match self {
            Self::TopCopper => "F_Cu",
            Self::BottomCopper => "B_Cu",
            Self::TopSilk => "F_SilkS",
            Self::BottomSilk => "B_SilkS",
            Self::TopSoldermask => "F_Mask",
            Self::BottomSoldermask => "B_Mask",
            Self::TopPaste => "F_Paste",
            Self::BottomPaste => "B_Paste",
            Self::BoardOutline => "Edge_Cuts",
        }
    }

    /// Label of the image node in the template's PCB material, if any.
    ///
    /// Paste and outline layers are exported for completeness but the
    /// template has no texture slot for them.
    pub fn material_slot(&self) -> Option<&'static str> {
        match self {
            Self::TopCopper => Some("Top Copper"),
            Self::BottomCopper => Some("Bottom Copper"),
            Self::TopSilk => Some("Top Silkscreen"),
            Self::BottomSilk => Some("Bottom Silkscreen"),
            Self::TopSoldermask => Some("Top Soldermask"),
            Self::BottomSoldermask => Some("Bottom Soldermask"),
            Self::TopPaste | Self::BottomPaste | Self::BoardOutline => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_token_matches_kicad_name() {
        for layer in LayerType::all() {
            assert_eq!(layer.file_token(), layer.kicad_name().replace('.', "_"));
        }
    }

    #[test]
    fn six_layers_have_material_slots() {
        let textured: Vec<_> = LayerType::all()
            .into_iter()
            .filter(|l| l.material_slot().is_some())
            .collect();
        assert_eq!(textured.len(), 6);
        assert!(!textured.contains(&LayerType::BoardOutline));
        assert!(!textured.contains(&LayerType::TopPaste));
    }

    #[test]
    fn slot_names_match_display_names() {
        for layer in LayerType::all() {
            if let Some(slot) = layer.material_slot() {
                assert_eq!(slot, layer.display_name());
            }
        }
    }
}
