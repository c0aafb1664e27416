use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::roster::Roster;
use crate::writer::{ClassFileReport, GenerationSummary};

const RULE_WIDTH: usize = 60;

/// Human-readable progress report for the operator
#[derive(Debug)]
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    /// Create a report writing to the given sink
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    /// Opening banner
    pub fn banner(&mut self, roster: &Roster) -> Result<()> {
        let settings = &roster.settings;

        writeln!(self.out)?;
        self.rule()?;
        writeln!(
            self.out,
            "🚀 Generator LDIF - Uczniowie {} (rok {})",
            settings.school_name, settings.school_year
        )?;
        self.rule()?;
        writeln!(self.out)?;
        Ok(())
    }

    /// One line per generated file
    pub fn class_written(&mut self, report: &ClassFileReport) -> Result<()> {
        writeln!(self.out, "✅ Wygenerowano: {} ({} uczniów)", report.file_name, report.student_count)?;
        Ok(())
    }

    /// Closing summary with the shared passwords, any username collisions and
    /// the command that applies the generated files
    pub fn summary(&mut self, roster: &Roster, summary: &GenerationSummary) -> Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(
            self.out,
            "✅ SUKCES! Wygenerowano {} oddziałów ({} uczniów)",
            summary.total_classes(),
            summary.total_students()
        )?;
        self.rule()?;
        writeln!(self.out)?;

        let directory = fs::canonicalize(&summary.output_dir)
            .unwrap_or_else(|_| summary.output_dir.clone());
        writeln!(self.out, "📁 Katalog: {}", directory.display())?;

        writeln!(self.out)?;
        writeln!(self.out, "🔐 Hasła:")?;
        for class in &roster.classes {
            writeln!(self.out, "   - {}: {}", class.code, roster.settings.shared_password(&class.code))?;
        }

        if !summary.collisions.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "⚠️ Kolizje loginów:")?;
            for collision in &summary.collisions {
                writeln!(self.out, "   - {}: {}", collision.username, collision.owners())?;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "🚀 Następny krok:")?;
        writeln!(self.out, "   cd ../user-ad/")?;
        writeln!(self.out, "   ./apply.sh")?;
        writeln!(self.out)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
