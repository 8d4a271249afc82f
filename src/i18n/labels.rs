use crate::foundation::core::Locale;

/// Fixed interface strings that are not part of authored content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    ReadMore,
    Download,
    WatchVideo,
    NoImage,
    NoSlides,
    NoNews,
    RenderError,
    Previous,
    Next,
    Close,
    Send,
    Name,
    Email,
    Message,
    Phone,
    Address,
}

impl Label {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::ReadMore, Locale::Id) => "Selengkapnya",
            (Self::ReadMore, Locale::En) => "Read more",
            (Self::Download, Locale::Id) => "Unduh",
            (Self::Download, Locale::En) => "Download",
            (Self::WatchVideo, Locale::Id) => "Tonton video",
            (Self::WatchVideo, Locale::En) => "Watch video",
            (Self::NoImage, Locale::Id) => "Gambar tidak tersedia",
            (Self::NoImage, Locale::En) => "No image available",
            (Self::NoSlides, Locale::Id) => "Belum ada slide",
            (Self::NoSlides, Locale::En) => "No slides yet",
            (Self::NoNews, Locale::Id) => "Belum ada berita",
            (Self::NoNews, Locale::En) => "No news yet",
            (Self::RenderError, Locale::Id) => "Kesalahan render",
            (Self::RenderError, Locale::En) => "Rendering error",
            (Self::Previous, Locale::Id) => "Sebelumnya",
            (Self::Previous, Locale::En) => "Previous",
            (Self::Next, Locale::Id) => "Berikutnya",
            (Self::Next, Locale::En) => "Next",
            (Self::Close, Locale::Id) => "Tutup",
            (Self::Close, Locale::En) => "Close",
            (Self::Send, Locale::Id) => "Kirim",
            (Self::Send, Locale::En) => "Send",
            (Self::Name, Locale::Id) => "Nama",
            (Self::Name, Locale::En) => "Name",
            (Self::Email, _) => "Email",
            (Self::Message, Locale::Id) => "Pesan",
            (Self::Message, Locale::En) => "Message",
            (Self::Phone, Locale::Id) => "Telepon",
            (Self::Phone, Locale::En) => "Phone",
            (Self::Address, Locale::Id) => "Alamat",
            (Self::Address, Locale::En) => "Address",
        }
    }
}

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Long month name for a 1-based month number.
pub fn month_name(locale: Locale, month: u32) -> &'static str {
    let table = match locale {
        Locale::Id => &MONTHS_ID,
        Locale::En => &MONTHS_EN,
    };
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or_default()
}

/// Human date in the locale's customary order (`17 Agustus 2025` / `August 17, 2025`).
pub fn format_date(locale: Locale, date: chrono::NaiveDate) -> String {
    use chrono::Datelike as _;

    let month = month_name(locale, date.month());
    match locale {
        Locale::Id => format!("{} {} {}", date.day(), month, date.year()),
        Locale::En => format!("{} {}, {}", month, date.day(), date.year()),
    }
}
