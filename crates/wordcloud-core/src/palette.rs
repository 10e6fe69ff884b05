use crate::Rgb;

pub const DEFAULT_COLORMAP: &str = "Accent";

/// Names offered by the colormap selector, in display order.
pub const COLORMAPS: &[&str] = &[
    "Accent", "Blues", "Dark2", "Greens", "Greys", "Oranges", "Paired", "Pastel1", "Pastel2",
    "PiYG", "Purples", "RdBu", "Reds", "Set1", "Set2", "Set3", "Spectral", "YlGnBu", "YlOrRd",
    "autumn", "cividis", "cool", "coolwarm", "copper", "hot", "inferno", "magma", "plasma",
    "rainbow", "spring", "summer", "tab10", "viridis", "winter",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    /// Discrete entries; a sample picks one of them.
    Listed,
    /// Stops interpolated linearly.
    Linear,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub name: &'static str,
    pub kind: PaletteKind,
    pub colors: &'static [Rgb],
}

impl Palette {
    /// Color at position `t` in `[0, 1]`.
    pub fn sample(&self, t: f32) -> Rgb {
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self.kind {
            PaletteKind::Listed => {
                let idx = ((t * n as f32).floor() as usize).min(n - 1);
                self.colors[idx]
            }
            PaletteKind::Linear => {
                let pos = t * (n - 1) as f32;
                let idx = (pos.floor() as usize).min(n - 2);
                self.colors[idx].lerp(self.colors[idx + 1], pos - idx as f32)
            }
        }
    }
}

pub fn palette(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|palette| palette.name == name)
}

const fn hex(value: u32) -> Rgb {
    Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

macro_rules! palettes {
    ($($name:literal => $kind:ident [$($color:literal),+ $(,)?]),+ $(,)?) => {
        pub(crate) const PALETTES: &[Palette] = &[
            $(Palette {
                name: $name,
                kind: PaletteKind::$kind,
                colors: &[$(hex($color)),+],
            }),+
        ];
    };
}

palettes! {
    "Accent" => Listed [0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0, 0xf0027f, 0xbf5b17, 0x666666],
    "Blues" => Linear [0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b],
    "Dark2" => Listed [0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666],
    "Greens" => Linear [0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b],
    "Greys" => Linear [0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000],
    "Oranges" => Linear [0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704],
    "Paired" => Listed [0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99, 0xe31a1c, 0xfdbf6f, 0xff7f00, 0xcab2d6, 0x6a3d9a, 0xffff99, 0xb15928],
    "Pastel1" => Listed [0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6, 0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2],
    "Pastel2" => Listed [0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9, 0xfff2ae, 0xf1e2cc, 0xcccccc],
    "PiYG" => Linear [0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7, 0xe6f5d0, 0xb8e186, 0x7fbc41, 0x4d9221, 0x276419],
    "Purples" => Linear [0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d],
    "RdBu" => Linear [0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061],
    "Reds" => Linear [0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d],
    "Set1" => Listed [0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf, 0x999999],
    "Set2" => Listed [0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854, 0xffd92f, 0xe5c494, 0xb3b3b3],
    "Set3" => Listed [0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3, 0xfdb462, 0xb3de69, 0xfccde5, 0xd9d9d9, 0xbc80bd, 0xccebc5, 0xffed6f],
    "Spectral" => Linear [0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5, 0x3288bd, 0x5e4fa2],
    "YlGnBu" => Linear [0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58],
    "YlOrRd" => Linear [0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026],
    "autumn" => Linear [0xff0000, 0xffff00],
    "cividis" => Linear [0x00224e, 0x123570, 0x3b496c, 0x575d6d, 0x707173, 0x8a8678, 0xa59c74, 0xc3b369, 0xe1cc55, 0xfee838],
    "cool" => Linear [0x00ffff, 0xff00ff],
    "coolwarm" => Linear [0x3b4cc0, 0x7396f5, 0xb0cbfc, 0xdddddd, 0xf6bfa6, 0xec8061, 0xb40426],
    "copper" => Linear [0x000000, 0xffc77f],
    "hot" => Linear [0x0b0000, 0xff0000, 0xffff00, 0xffffff],
    "inferno" => Linear [0x000004, 0x1b0c41, 0x4a0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9b06, 0xf7d13d, 0xfcffa4],
    "magma" => Linear [0x000004, 0x180f3d, 0x440f76, 0x721f81, 0x9e2f7f, 0xcd4071, 0xf1605d, 0xfd9668, 0xfeca8d, 0xfcfdbf],
    "plasma" => Linear [0x0d0887, 0x46039f, 0x7201a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfb9f3a, 0xfdca26, 0xf0f921],
    "rainbow" => Linear [0x8000ff, 0x2adddd, 0x80ffb4, 0xd4dd80, 0xff0000],
    "spring" => Linear [0xff00ff, 0xffff00],
    "summer" => Linear [0x008066, 0xffff66],
    "tab10" => Listed [0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf],
    "viridis" => Linear [0x440154, 0x482878, 0x3e4989, 0x31688e, 0x26828e, 0x1f9e89, 0x35b779, 0x6ece58, 0xb5de2b, 0xfde725],
    "winter" => Linear [0x0000ff, 0x00ff80],
}
