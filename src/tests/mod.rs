use std::fs;
use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::ldif::render_class_file;
use crate::roster::{builtin_roster, ClassRecord, DirectorySettings, Roster, StudentRecord};
use crate::writer::{generate_all, ClassFileWriter};

fn small_class() -> ClassRecord {
    ClassRecord {
        code: "1CT2".to_string(),
        ou: "Class-1CT2".to_string(),
        specialization: "technik teleinformatyk".to_string(),
        teacher: "Piotr Muszyński (Mu)".to_string(),
        students: vec![
            StudentRecord::new("Tymoteusz", "Cieśliński"),
            StudentRecord::new("Aleksander", "Macioszek-Kurc"),
        ],
    }
}

#[test]
fn test_render_complete_class_file() {
    let content = render_class_file(&small_class(), &DirectorySettings::default());

    assert_eq!(content, r"# User AD - Oddział 1CT2 (technik teleinformatyk, 2 uczniów)
# OU: OU=Class-1CT2,OU=Students,DC=ad,DC=zsel,DC=opole,DC=pl
# Wychowawca: Piotr Muszyński (Mu)
# Hasło wspólne dla całego oddziału: 1CT22025
# Data: 20.11.2025 - RZECZYWISTE DANE

# Organizational Unit: Class-1CT2
dn: OU=Class-1CT2,OU=Students,DC=ad,DC=zsel,DC=opole,DC=pl
objectClass: organizationalUnit
ou: Class-1CT2
description: Oddział 1CT2 - technik teleinformatyk (rok 1, 2 uczniów)

# Uczeń: Tymoteusz Cieśliński
dn: CN=tymoteusz.cieslinski,OU=Class-1CT2,OU=Students,DC=ad,DC=zsel,DC=opole,DC=pl
objectClass: user
cn: tymoteusz.cieslinski
sAMAccountName: tymoteusz.cieslinski
givenName: Tymoteusz
sn: Cieśliński
displayName: Tymoteusz Cieśliński (1CT2)
mail: tymoteusz.cieslinski@student.zsel.opole.pl
userPrincipalName: tymoteusz.cieslinski@ad.zsel.opole.pl
description: Uczeń 1CT2 - technik teleinformatyk
homeDirectory: \\nextcloud.zsel.opole.pl\home\students\tymoteusz.cieslinski
homeDrive: H:
scriptPath: logon-student.bat
userAccountControl: 512
memberOf: CN=Students,OU=Groups,DC=ad,DC=zsel,DC=opole,DC=pl
memberOf: CN=Class-1CT2,OU=Groups,DC=ad,DC=zsel,DC=opole,DC=pl
memberOf: CN=Specialization-technik-teleinformatyk,OU=Groups,DC=ad,DC=zsel,DC=opole,DC=pl


# Uczeń: Aleksander Macioszek-Kurc
dn: CN=aleksander.macioszek-kurc,OU=Class-1CT2,OU=Students,DC=ad,DC=zsel,DC=opole,DC=pl
objectClass: user
cn: aleksander.macioszek-kurc
sAMAccountName: aleksander.macioszek-kurc
givenName: Aleksander
sn: Macioszek-Kurc
displayName: Aleksander Macioszek-Kurc (1CT2)
mail: aleksander.macioszek-kurc@student.zsel.opole.pl
userPrincipalName: aleksander.macioszek-kurc@ad.zsel.opole.pl
description: Uczeń 1CT2 - technik teleinformatyk
homeDirectory: \\nextcloud.zsel.opole.pl\home\students\aleksander.macioszek-kurc
homeDrive: H:
scriptPath: logon-student.bat
userAccountControl: 512
memberOf: CN=Students,OU=Groups,DC=ad,DC=zsel,DC=opole,DC=pl
memberOf: CN=Class-1CT2,OU=Groups,DC=ad,DC=zsel,DC=opole,DC=pl
memberOf: CN=Specialization-technik-teleinformatyk,OU=Groups,DC=ad,DC=zsel,DC=opole,DC=pl
");
}

#[test]
fn test_blank_line_layout_between_blocks() {
    let mut class = small_class();
    class.students.push(StudentRecord::new("Adam", "Gaj"));
    let content = render_class_file(&class, &DirectorySettings::default());

    // One blank line after the preamble and the OU entry, two between students
    let blocks: Vec<&str> = content.split("\n\n").collect();
    assert_eq!(blocks.len(), 5);
    assert!(blocks[0].starts_with("# User AD - Oddział 1CT2"));
    assert!(blocks[1].starts_with("# Organizational Unit: Class-1CT2"));
    assert!(blocks[2].starts_with("# Uczeń: Tymoteusz Cieśliński"));
    assert!(blocks[3].starts_with("\n# Uczeń: Aleksander Macioszek-Kurc"));
    assert!(blocks[4].starts_with("\n# Uczeń: Adam Gaj"));

    assert!(!content.contains("\n\n\n\n"));
    assert!(content.ends_with("DC=ad,DC=zsel,DC=opole,DC=pl\n"));
    assert!(!content.ends_with("\n\n"));
}

#[test]
fn test_class_without_students_is_header_only() {
    let mut class = small_class();
    class.students.clear();
    let content = render_class_file(&class, &DirectorySettings::default());

    assert!(content.ends_with("description: Oddział 1CT2 - technik teleinformatyk (rok 1, 0 uczniów)\n"));
    assert_eq!(content.matches("\n\n").count(), 1);
}

#[test]
fn test_every_builtin_class_has_one_unit_and_n_users() {
    let roster = builtin_roster();

    for class in &roster.classes {
        let content = render_class_file(class, &roster.settings);
        let unit_dn = format!("dn: OU={},", class.ou);
        let user_dn_suffix = format!(",OU={},OU=Students,", class.ou);

        let unit_blocks = content.lines().filter(|line| line.starts_with(&unit_dn)).count();
        let user_dns: Vec<&str> = content.lines().filter(|line| line.starts_with("dn: CN=")).collect();

        assert_eq!(unit_blocks, 1, "class {}", class.code);
        assert_eq!(content.matches("objectClass: organizationalUnit").count(), 1);
        assert_eq!(content.matches("objectClass: user").count(), class.student_count());
        assert_eq!(user_dns.len(), class.student_count(), "class {}", class.code);
        assert!(user_dns.iter().all(|dn| dn.contains(&user_dn_suffix)));
    }
}

#[test]
fn test_writer_places_file_by_class_code() -> Result<()> {
    let temp_dir = tempdir()?;
    let writer = ClassFileWriter::with_defaults(temp_dir.path().join("students"));

    let report = writer.write_class(&small_class())?;

    assert_eq!(report.file_name, "class-1ct2.ldif");
    assert_eq!(report.student_count, 2);
    assert_eq!(report.path, temp_dir.path().join("students").join("class-1ct2.ldif"));
    assert_eq!(fs::read_to_string(&report.path)?.len(), report.bytes_written);
    Ok(())
}

#[test]
fn test_generate_rejects_invalid_roster_before_writing() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("out");
    let roster = Roster::new(DirectorySettings::default(), vec![small_class(), small_class()]);

    assert!(generate_all(&roster, &output_dir).is_err());
    assert!(!output_dir.exists());
    Ok(())
}
