//! Procedures shared by all pages of the output
//!
//! Every procedure reads its geometry from the names defined in the setup
//! section, so the prolog only depends on the labels, the branding and
//! whether alignment marks are wanted.

use std::io::{self, Write};

use crate::options::RunConfig;

use super::logo::{LOGO_PATH, LOGO_SIZE};
use super::writer::{PsWriter, ps_number, ps_string};

const CROP_MARKS: &str = r"/cropmark	% x y cropmark -
{	moveto
	clipmargin neg 0 rmoveto
	clipmargin 2 mul 0 rlineto
	clipmargin neg clipmargin neg rmoveto
	0 clipmargin 2 mul rlineto
	stroke
} bind def

/cropmarks	% - cropmarks -
{	gsave
	0 setgray 1 setlinewidth
	leftmargin botmargin moveto
	0 pageheight rlineto
	pagewidth 0 rlineto
	0 pageheight neg rlineto closepath stroke
	0.5 setlinewidth
	leftmargin botmargin cropmark
	leftmargin pagewidth add botmargin cropmark
	leftmargin botmargin pageheight add cropmark
	leftmargin pagewidth add botmargin pageheight add cropmark
	grestore
} bind def

/labelorigin	% - labelorigin -
{	leftmargin clipmargin 3 mul add
	botmargin clipmargin sub labelsize sub moveto
} bind def

";

const ALIGNMENT_MARKS: &str = r"/alignmark	% draw a cross at the current point
{	gsave
	0 setgray 1 setlinewidth
	-10 -10 rmoveto
	20 20 rlineto
	-20 0 rmoveto
	20 -20 rlineto stroke
	grestore
} bind def

/alignmarkhor
{	120 0 rmoveto
	alignmark
	pagewidth 240 sub 0 rmoveto
	alignmark
} bind def

/alignmarkver
{	0 120 rmoveto
	alignmark
	0 pageheight 240 sub rmoveto
	alignmark
} bind def

/alignmarks	% left bottom right top alignmarks -
{	/marktop exch def
	/markright exch def
	/markbottom exch def
	/markleft exch def
	gsave
	markleft { leftmargin botmargin moveto alignmarkver } if
	markbottom { leftmargin botmargin moveto alignmarkhor } if
	markright { leftmargin pagewidth add botmargin moveto alignmarkver } if
	marktop { leftmargin botmargin pageheight add moveto alignmarkhor } if
	grestore
} bind def

";

const TILE_PROLOG: &str = r"% usage: row col tileprolog ps-code page sheetrow sheetcol edges tileepilog
% these procedures output the tile at poster row & col
/tileprolog
{	/colcount exch def
	/rowcount exch def
	gsave
	leftmargin botmargin translate
	% clip page contents
	clipmargin neg dup moveto
	pagewidth clipmargin 2 mul add 0 rlineto
	0 pageheight clipmargin 2 mul add rlineto
	pagewidth clipmargin 2 mul add neg 0 rlineto
	closepath clip
	% set page contents transformation
	do_turn
	{	pagewidth 0 translate
		90 rotate
		pageheight colcount 1 sub mul neg
		pagewidth rowcount 1 sub mul neg
	}
	{	pagewidth colcount 1 sub mul neg
		pageheight rowcount 1 sub mul neg
	} ifelse
	translate
	posterxl posteryb translate
	sfactor dup scale
	imagexl neg imageyb neg translate
	tiledict begin
	0 setgray 0 setlinecap 1 setlinewidth
	0 setlinejoin 10 setmiterlimit [] 0 setdash newpath
} bind def

";

const COVER_PROLOG: &str = r"% usage: coverprolog ps-code coverepilog grid... coverfinish
% these procedures output the cover page
/coverprolog
{	gsave
	coverxl coveryb translate
	coverscale dup scale
	0 0 moveto
	areawidth 0 rlineto
	0 areaheight rlineto
	areawidth neg 0 rlineto
	closepath clip
	posterxl posteryb translate
	sfactor dup scale
	imagexl neg imageyb neg translate
	tiledict begin
	0 setgray 0 setlinecap 1 setlinewidth
	0 setlinejoin 10 setmiterlimit [] 0 setdash newpath
} bind def

/coverepilog
{	end % of tiledict
	grestore
} bind def

";

fn write_tile_epilog<W: Write>(w: &mut PsWriter<W>, config: &RunConfig) -> io::Result<()> {
    let labels = &config.labels;

    w.write_code(
        r"/tileepilog
{	end % of tiledict
	grestore
	/edges exch def
	/sheetcol exch def
	/sheetrow exch def
	/pagenr exch def
	cropmarks
	% print the page label
	0 setgray
	/Helvetica findfont labelsize scalefont setfont
	labelorigin
",
    )?;
    w.write_line(&format!("\t{} show", ps_string(&format!("{} ", labels.page))))?;
    w.write_line("\tpagenr strg cvs show")?;
    w.write_line(&format!("\t{} show", ps_string(&format!(": {} ", labels.row))))?;
    w.write_line("\tsheetrow strg cvs show")?;
    w.write_line(&format!("\t{} show", ps_string(&format!(", {} ", labels.column))))?;
    w.write_line("\tsheetcol strg cvs show")?;
    w.write_line("\tsitelabel")?;
    if config.alignment_marks {
        w.write_line("\tedges aload pop alignmarks")?;
    }
    w.write_code("\tshowpage\n} bind def\n\n")
}

fn write_site_label<W: Write>(w: &mut PsWriter<W>, config: &RunConfig) -> io::Result<()> {
    w.write_line("/sitelabel\t% - sitelabel -")?;
    w.write_line(&format!("{{\t{}", ps_string(&config.branding.site)))?;
    w.write_code(
        r"	dup stringwidth pop
	leftmargin pagewidth add exch sub
	botmargin clipmargin sub labelsize sub moveto
	show
} bind def

",
    )
}

fn write_cover_grid<W: Write>(w: &mut PsWriter<W>, config: &RunConfig) -> io::Result<()> {
    let labels = &config.labels;

    w.write_code(
        r"/covergrid	% x y width height page sheetrow sheetcol covergrid -
{	/gridcol exch def
	/gridrow exch def
	/gridpage exch def
	/gridh exch def
	/gridw exch def
	/gridy exch def
	/gridx exch def
	gsave
	0.6 setgray 0.5 setlinewidth
	gridx gridy moveto
	gridw 0 rlineto
	0 gridh rlineto
	gridw neg 0 rlineto closepath stroke
	/Helvetica findfont labelsize scalefont setfont
	gridx 3 add gridy 3 add moveto
",
    )?;
    w.write_line(&format!("\t{} show", ps_string(&format!("{} ", labels.row))))?;
    w.write_line("\tgridrow strg cvs show")?;
    w.write_line(&format!("\t{} show", ps_string(&format!(", {} ", labels.column))))?;
    w.write_code(
        r"	gridcol strg cvs show
	% page number in outline, as large as the cell allows
	gridw gridh 2 copy gt { exch } if pop 0.4 mul
	/Helvetica findfont exch scalefont setfont
	gridx gridw 0.15 mul add gridy gridh 0.35 mul add moveto
	gridpage strg cvs true charpath
	0.3 setlinewidth stroke
	grestore
} bind def

",
    )
}

fn write_cover_finish<W: Write>(w: &mut PsWriter<W>, config: &RunConfig) -> io::Result<()> {
    let labels = &config.labels;
    let branding = &config.branding;
    let (logo_width, logo_height) = LOGO_SIZE;

    w.write_code(
        r"/coverfinish
{	0 setgray
	/Helvetica findfont labelsize scalefont setfont
	labelorigin
",
    )?;
    w.write_line(&format!("\t{} show", ps_string(&labels.cover_page)))?;
    w.write_line("\tsitelabel")?;
    w.write_code(
        r"	% title block
	/headerx leftmargin clipmargin 3 mul add def
	/headertop botmargin pageheight add def
	headerx headertop 24 sub moveto
	/Helvetica findfont 24 scalefont setfont
",
    )?;
    w.write_line(&format!("\t{} show", ps_string(&branding.name)))?;
    w.write_code(
        r"	headerx headertop 38 sub moveto
	/Helvetica findfont 11 scalefont setfont
",
    )?;
    w.write_line(&format!("\t{} show", ps_string(&labels.tagline)))?;
    w.write_code(
        r"	headerx headertop 70 sub moveto
	/Helvetica findfont 28 scalefont setfont
	patterntitle show
	headerx clipmargin add headertop 84 sub moveto
	/Helvetica findfont 9 scalefont setfont
	0.5 setgray
",
    )?;
    w.write_line(&format!("\t{} show", ps_string(&branding.handle_prefix)))?;
    w.write_code(
        r"	patternhandle show
	0 setgray 0.5 setlinewidth
	headerx headertop 92 sub moveto
	leftmargin pagewidth add headertop 92 sub lineto stroke
	gsave
",
    )?;
    w.write_line(&format!(
        "\tleftmargin pagewidth add {} sub headertop {} sub translate",
        ps_number(logo_width + 6.0),
        ps_number(logo_height + 6.0)
    ))?;
    w.write_code("\tlogo\n\tgrestore\n\tshowpage\n} bind def\n\n")
}

fn write_logo<W: Write>(w: &mut PsWriter<W>) -> io::Result<()> {
    w.write_code(
        r"/logo
{	% print the logo
	/m { moveto } bind def
	/c { curveto } bind def
	/l { lineto } bind def
	/h { closepath } bind def
	/f { fill } bind def
	gsave
	0 setgray
",
    )?;
    w.write_code(LOGO_PATH)?;
    w.write_code("\tgrestore\n} bind def\n\n")
}

/// Write the `%%BeginProlog` ... `%%EndProlog` section.
pub fn write_prolog<W: Write>(w: &mut PsWriter<W>, config: &RunConfig) -> io::Result<()> {
    w.write_meta("BeginProlog")?;
    w.write_code(CROP_MARKS)?;
    write_site_label(w, config)?;
    if config.alignment_marks {
        w.write_code(ALIGNMENT_MARKS)?;
    }
    w.write_code(TILE_PROLOG)?;
    write_tile_epilog(w, config)?;
    w.write_code(COVER_PROLOG)?;
    write_cover_grid(w, config)?;
    write_cover_finish(w, config)?;
    write_logo(w)?;
    w.write_meta("EndProlog")?;
    w.blank_line()
}
