//! String codes and display metadata for qualification records.

pub const MARKET_AC: &str = "AC";
pub const MARKET_ACCIONES: &str = "ACCIONES";
pub const MARKET_BONOS: &str = "BONOS";
pub const MARKET_FUTUROS: &str = "FUTUROS";

pub const ORIGIN_BROKER: &str = "BROKER";
pub const ORIGIN_TAX_SPECIALIST: &str = "TAX_SPECIALIST";
pub const ORIGIN_ADMIN: &str = "ADMIN";

/// Marker spliced into the event sequence of a copied record.
pub const COPY_SEQUENCE_MARKER: &str = "_COPIA_";

/// Event sequence pre-filled on the entry form.
pub const DEFAULT_EVENT_SEQUENCE: &str = "100000807";

/// Statutory label for each credit-factor column, keyed by field code.
/// Shipped as data so the host UI can render the long names next to the
/// short `Factor-XX` captions.
pub const FACTOR_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "factor_08",
        "Con crédito por IDPC generados a contar del 01.01.2017",
    ),
    (
        "factor_09",
        "Con crédito por IDPC acumulados hasta el 31.12.2016",
    ),
    (
        "factor_10",
        "Con derecho a crédito por pago IDPC Voluntario",
    ),
    ("factor_11", "Sin derecho a credito"),
    (
        "factor_12",
        "Impto. 1ra Categ. Exento Gl Comp. Con Devolución",
    ),
    (
        "factor_13",
        "Impto. 1ra Categ. Afecto Gl Comp. Sin Devolución",
    ),
    (
        "factor_14",
        "Impto. 1ra Categ. Exento Gl Comp. Sin Devolución",
    ),
    ("factor_15", "Impto. Créditos pro Impuestos Externos"),
    ("factor_16", "No Constitutiva de Renta Acogido a Impto."),
    (
        "factor_17",
        "No Constitutiva de Renta Devolución de Capital Art.17",
    ),
    (
        "factor_18",
        "Rentas Exentas de Impto. GC Y/O Impto Adicional",
    ),
    ("factor_19", "Ingreso no Constitutivos de Renta"),
    ("factor_20", "Sin Derecho a Devolucion"),
    ("factor_21", "Con Derecho a Devolucion"),
    ("factor_22", "Sin Derecho a Devolucion"),
    ("factor_23", "Con Derecho a Devolucion"),
    ("factor_24", "Sin Derecho a Devolucion"),
    ("factor_25", "Con Derecho a Devolucion"),
    ("factor_26", "Sin Derecho a Devolucion"),
    ("factor_27", "Con Derecho a Devolucion"),
    ("factor_28", "Credito por IPE"),
    ("factor_29", "Sin Derecho a Devolucion"),
    ("factor_30", "Con Derecho a Devolucion"),
    ("factor_31", "Sin Derecho a Devolucion"),
    ("factor_32", "Con Derecho a Devolucion"),
    ("factor_33", "Credito por IPE"),
    (
        "factor_34",
        "Cred. Por Impto. Tasa Adicional, Ex Art. 21 UR",
    ),
    ("factor_35", "Tasa Efectiva Del Cred. Del FUT (TEF)"),
    ("factor_36", "TASA EFECTIVA DEL CRED. DEL FUNT (TEX)"),
    ("factor_37", "DEVOLUCION DE CAPITAL ART. 17 NUM 7 UR"),
    ("factor_198", "Ingreso no Constitutivos de Renta"),
];
