// Drive type codes the partition manager knows by name.
//
// The code is cosmetic, geometry comes from the header fields. Codes above
// 0x1D make the manager print garbage.

/// CDC (Seagate) Swift 94354-200.
pub const DRIVE_TYPE_SWIFT_200: u8 = 0x10;

const DRIVE_TYPE_LABELS: [&str; 0x1E] = [
    "DRIVE ID = $00",
    "WESTERN DIGITAL 93028",
    "WESTERN DIGITAL 93048",
    "SWIFT",
    "SEAGATE 125",
    "CONNER 3104",
    "QUANTUM",
    "RODIME 100",
    "MINISCRIBE 8051",
    "WESTERN DIGITAL 93044",
    "CONNER 344",
    "SEAGATE 157",
    "MINISCRIBE 8225",
    "MINISCRIBE 8450",
    "CONNER 3024",
    "SWIFT 230",
    "SWIFT 200",
    "SWIFT 126",
    "SWIFT 090",
    "QUANTUM",
    "MAXTOR",
    "CONNER",
    "MICROSCI",
    "WESTERN DIGITAL AC280",
    "KYOCERA",
    "KYOCERA",
    "WESTERN DIGITAL 93024",
    "WD CAVIAR 140",
    "WD CAVIAR 280",
    "CONNER 30104",
];

/// The name the partition manager shows for a drive type code, if it has one.
pub fn drive_type_label(code: u8) -> Option<&'static str> {
    DRIVE_TYPE_LABELS.get(code as usize).copied()
}
